use std::fmt;

use thiserror::Error;

/// 输入校验失败时展示给用户的固定提示
pub const VALIDATION_MESSAGE: &str = "⚠️ Please enter a valid mass and height!";

/// 校验错误（唯一的错误类型）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", VALIDATION_MESSAGE)]
pub struct ValidationError;

/// BMI 分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese1,
    Obese2,
    Obese3,
}

/// 分类表：(上界, 上界是否包含, 分类)，按顺序匹配第一个满足的区间
///
/// 区间之间的空隙（如 24.95）会落入下一个分类，最后一项兜底。
const BANDS: [(f64, bool, Category); 6] = [
    (18.5, false, Category::Underweight),
    (24.9, true, Category::Normal),
    (29.9, true, Category::Overweight),
    (34.9, true, Category::Obese1),
    (39.9, true, Category::Obese2),
    (f64::INFINITY, true, Category::Obese3),
];

impl Category {
    /// 根据（已四舍五入的）指数查表分类
    pub fn classify(index: f64) -> Self {
        BANDS
            .iter()
            .find(|(upper, inclusive, _)| {
                if *inclusive {
                    index <= *upper
                } else {
                    index < *upper
                }
            })
            .map(|(_, _, category)| *category)
            .unwrap_or(Category::Obese3)
    }

    /// 稳定的分类标签
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Underweight => "UNDERWEIGHT",
            Category::Normal => "NORMAL",
            Category::Overweight => "OVERWEIGHT",
            Category::Obese1 => "OBESE_1",
            Category::Obese2 => "OBESE_2",
            Category::Obese3 => "OBESE_3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obese1 => "Obesity Class I",
            Category::Obese2 => "Obesity Class II",
            Category::Obese3 => "Obesity Class III",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 一次计算的输入（公斤 / 米）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub mass: f64,
    pub height: f64,
}

impl Measurement {
    /// 从用户输入的文本解析并校验
    pub fn parse(mass_text: &str, height_text: &str) -> Result<Self, ValidationError> {
        let mass = parse_number(mass_text)?;
        let height = parse_number(height_text)?;

        // 体重为非正数时同样视为无效输入
        if mass <= 0.0 || height <= 0.0 {
            return Err(ValidationError);
        }

        Ok(Self { mass, height })
    }

    /// 计算保留两位小数的指数
    pub fn index(&self) -> Result<f64, ValidationError> {
        let raw = self.mass / (self.height * self.height);
        if raw.is_finite() {
            Ok(round2(raw))
        } else {
            Err(ValidationError)
        }
    }
}

/// 计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub index: f64,
    pub category: Category,
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BMI: {:.2} ({})", self.index, self.category)
    }
}

/// 校验 → 计算 → 分类
pub fn evaluate(mass_text: &str, height_text: &str) -> Result<BmiResult, ValidationError> {
    let measurement = Measurement::parse(mass_text, height_text)?;
    let index = measurement.index()?;
    Ok(BmiResult {
        index,
        category: Category::classify(index),
    })
}

fn parse_number(text: &str) -> Result<f64, ValidationError> {
    let value: f64 = text.trim().parse().map_err(|_| ValidationError)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError)
    }
}

/// 四舍五入到两位小数（远离零方向）
fn round2(value: f64) -> f64 {
    // 1e15 以上的 f64 已无两位小数精度，乘 100 反而可能溢出
    if value.abs() >= 1e15 {
        return value;
    }
    (value * 100.0).round() / 100.0
}
