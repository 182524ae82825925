//! LLM 서비스 경로 값 객체(검증 후 캐시되는 파생 상태).

use serde::Serialize;

/// 캐시되는 네 가지 경로의 역할.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmPathRole {
    Model,
    Embedding,
    Reranker,
    State,
}

impl LlmPathRole {
    /// 검증/갱신 순서.
    pub const ALL: [LlmPathRole; 4] = [
        LlmPathRole::Model,
        LlmPathRole::Embedding,
        LlmPathRole::Reranker,
        LlmPathRole::State,
    ];

    /// 설정 문서 안의 필드 이름.
    pub fn field_name(self) -> &'static str {
        match self {
            LlmPathRole::Model => "base_model_path",
            LlmPathRole::Embedding => "embedding_path",
            LlmPathRole::Reranker => "reranker_path",
            LlmPathRole::State => "state_path",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LlmPaths {
    pub base_model_path: String,
    pub embedding_path: String,
    pub reranker_path: String,
    pub state_path: String,
}

impl LlmPaths {
    pub fn get(&self, role: LlmPathRole) -> &str {
        match role {
            LlmPathRole::Model => &self.base_model_path,
            LlmPathRole::Embedding => &self.embedding_path,
            LlmPathRole::Reranker => &self.reranker_path,
            LlmPathRole::State => &self.state_path,
        }
    }

    pub fn set(&mut self, role: LlmPathRole, value: String) {
        let slot = match role {
            LlmPathRole::Model => &mut self.base_model_path,
            LlmPathRole::Embedding => &mut self.embedding_path,
            LlmPathRole::Reranker => &mut self.reranker_path,
            LlmPathRole::State => &mut self.state_path,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        LlmPathRole::ALL.iter().all(|role| self.get(*role).is_empty())
    }
}

/// 경로 갱신 요청. `None`과 빈 문자열은 "변경 없음"으로 취급한다.
#[derive(Debug, Clone, Default)]
pub struct LlmPathUpdate {
    pub base_model_path: Option<String>,
    pub embedding_path: Option<String>,
    pub reranker_path: Option<String>,
    pub state_path: Option<String>,
}

impl LlmPathUpdate {
    pub fn requested(&self, role: LlmPathRole) -> Option<&str> {
        let value = match role {
            LlmPathRole::Model => &self.base_model_path,
            LlmPathRole::Embedding => &self.embedding_path,
            LlmPathRole::Reranker => &self.reranker_path,
            LlmPathRole::State => &self.state_path,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        LlmPathRole::ALL
            .iter()
            .all(|role| self.requested(*role).is_none())
    }
}
