use serde::Deserialize;

/// 同一張照片被多個相簿引用時的處理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClaimPolicy {
    /// 第二個相簿引用時中止執行
    #[default]
    Strict,
    /// 保留在第一個相簿，略過之後的引用
    Lenient,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub allow_shared_photos: bool,
    pub confirm_before_move: bool,
}

impl UserSettings {
    #[must_use]
    pub const fn claim_policy(&self) -> ClaimPolicy {
        if self.allow_shared_photos {
            ClaimPolicy::Lenient
        } else {
            ClaimPolicy::Strict
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
