//! 表单提交数据

use crate::app::config::types::{
    CrumbRow, EnglishCrumb, FrenchCrumb,
};

/// 一次表单提交（或增删行时携带的未保存输入）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// 首页面包屑开关
    pub front_page_crumb: bool,
    /// 按提交顺序排列的行
    pub rows: Vec<CrumbRow>,
}

impl FormSubmission {
    /// 创建提交
    pub fn new(front_page_crumb: bool, rows: Vec<CrumbRow>) -> Self {
        Self {
            front_page_crumb,
            rows,
        }
    }

    /// 去掉四个字段都为空的行
    pub fn without_blank_rows(mut self) -> Self {
        self.rows.retain(|row| !row.is_blank());
        self
    }

    /// 拆分为按下标对齐的英文、法文列表
    pub fn flatten(&self) -> (Vec<EnglishCrumb>, Vec<FrenchCrumb>) {
        flatten_rows(&self.rows)
    }
}

/// 将提交的行拆分为按下标对齐的英文、法文列表
///
/// 每一行都会在两个列表中各占一个位置，字段缺失时对应值为 `None`。
pub fn flatten_rows(
    rows: &[CrumbRow],
) -> (Vec<EnglishCrumb>, Vec<FrenchCrumb>) {
    rows.iter().map(CrumbRow::split).unzip()
}
