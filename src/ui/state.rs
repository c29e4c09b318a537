//! App 状态定义 (Model)
//!
//! 包含表单状态结构体及焦点枚举

use crate::config::Palette;
use crate::models::BmiResult;

/// 表单状态
pub struct App {
    pub mass_input: String,
    pub height_input: String,
    pub focus: Focus,
    pub result: Option<BmiResult>,
    pub error: Option<String>,
    pub palette: Palette,
}

/// 可获得焦点的控件，按 Tab 顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Mass,
    Height,
    CalculateButton,
    ClearButton,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Mass,
        Focus::Height,
        Focus::CalculateButton,
        Focus::ClearButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// 是否为文本输入框
    pub fn is_input(self) -> bool {
        matches!(self, Focus::Mass | Focus::Height)
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(palette: Palette) -> Self {
        Self {
            mass_input: String::new(),
            height_input: String::new(),
            focus: Focus::Mass,
            result: None,
            error: None,
            palette,
        }
    }

    /// 当前焦点所在输入框的缓冲区
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Mass => Some(&mut self.mass_input),
            Focus::Height => Some(&mut self.height_input),
            Focus::CalculateButton | Focus::ClearButton => None,
        }
    }
}
