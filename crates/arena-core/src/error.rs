//! 几何生成错误定义

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// 场地或篮架配置不合法（尺寸非正或相互矛盾）
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// 生成器参数越界（段数过少、半径为负等）
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// 要求数值有限且大于零，否则返回 `InvalidConfig`
pub(crate) fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}
