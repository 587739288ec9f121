//! 人物详情展示字段

use swapi_browser_client::datetime::format_day_month_year;
use swapi_browser_client::Character;

/// 单个展示字段的值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    /// 已格式化的值
    Value(String),
    /// 记录中缺少该字段
    Missing,
}

impl DetailValue {
    /// 已格式化的值，缺失时为 `None`
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing => None,
        }
    }
}

impl From<Option<String>> for DetailValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Missing, Self::Value)
    }
}

/// 详情弹窗中的派生字段
///
/// 只读投影：由 `&Character` 计算，不修改原记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetails {
    pub name: String,
    /// 身高（米）
    pub height: DetailValue,
    /// 体重（附加 " kg"）
    pub mass: DetailValue,
    pub birth_year: DetailValue,
    /// 收录日期（dd-mm-yyyy）
    pub date_added: DetailValue,
    /// 出场电影数
    pub appearances: DetailValue,
}

impl From<&Character> for CharacterDetails {
    fn from(character: &Character) -> Self {
        Self {
            name: character.display_name().to_string(),
            height: height_in_metres(character).into(),
            mass: character.mass.as_ref().map(|m| format!("{m} kg")).into(),
            birth_year: character.birth_year.clone().into(),
            date_added: character
                .created
                .as_deref()
                .map(|c| format_day_month_year(c).unwrap_or_else(|| c.to_string()))
                .into(),
            appearances: character.film_count().map(|n| n.to_string()).into(),
        }
    }
}

/// 厘米换算为米；非数字（如 "unknown"）原样显示
fn height_in_metres(character: &Character) -> Option<String> {
    let raw = character.height.as_ref()?;
    Some(match character.height_cm() {
        Some(cm) => (cm / 100.0).to_string(),
        None => raw.clone(),
    })
}
