//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑以及计算、清空等操作

use super::actions::Action;
use super::state::{App, Focus};
use crate::models::evaluate;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Calculate => self.calculate(),
            Action::Clear => self.clear(),
            Action::Input(c) => {
                if let Some(buffer) = self.focused_input_mut() {
                    buffer.push(c);
                }
            }
            Action::DeleteChar => {
                if let Some(buffer) = self.focused_input_mut() {
                    buffer.pop();
                }
            }
        }
        false
    }

    /// 计算 BMI，成功时清除错误，失败时清除旧结果
    pub fn calculate(&mut self) {
        match evaluate(&self.mass_input, &self.height_input) {
            Ok(result) => {
                tracing::debug!(
                    index = result.index,
                    category = result.category.tag(),
                    "bmi calculated"
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                tracing::debug!(
                    mass = %self.mass_input,
                    height = %self.height_input,
                    "rejected input"
                );
                self.result = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// 重置为初始状态
    pub fn clear(&mut self) {
        self.mass_input.clear();
        self.height_input.clear();
        self.result = None;
        self.error = None;
        self.focus = Focus::Mass;
        tracing::debug!("form cleared");
    }
}
