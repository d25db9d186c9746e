//! 界面组件

pub mod form;
pub mod modal;
pub mod results;
pub mod statusbar;
