//! 面包屑行验证模块
//!
//! 负责在保存前检查提交的每一行，收集全部字段错误

use std::fmt;
use thiserror::Error;

use crate::app::config::types::{CrumbField, CrumbRow};
use crate::utils::helpers::{char_len, contains_ignore_case};

/// 外部链接的最小长度
pub const MIN_URL_LENGTH: usize = 11;
/// 面包屑名称的最小长度
pub const MIN_LABEL_LENGTH: usize = 2;

/// 字段错误类别
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// 无效的外部链接
    #[error("Please provide a valid external url.")]
    InvalidExternalUrl,
    /// 无效的面包屑名称
    #[error("Please provide a valid breadcrumb name.")]
    InvalidBreadcrumbName,
}

/// 某一行某个字段上的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// 行下标（从 0 开始）
    pub row: usize,
    /// 出错字段
    pub field: CrumbField,
    /// 错误类别
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.field.tree_name(self.row),
            self.kind
        )
    }
}

impl std::error::Error for FieldError {}

/// 面包屑验证器
pub struct CrumbValidator;

impl CrumbValidator {
    /// 验证所有行，返回按行、按字段顺序累积的错误
    ///
    /// 发现错误后继续检查剩余行，空结果表示可以保存。
    pub fn validate_rows(rows: &[CrumbRow]) -> Vec<FieldError> {
        rows.iter()
            .enumerate()
            .flat_map(|(index, row)| {
                Self::validate_row(index, row)
            })
            .collect()
    }

    /// 验证单行
    pub fn validate_row(
        index: usize,
        row: &CrumbRow,
    ) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut reject = |field: CrumbField,
                          kind: FieldErrorKind| {
            tracing::debug!(
                "Rejected {}: {}",
                field.tree_name(index),
                kind
            );
            errors.push(FieldError {
                row: index,
                field,
                kind,
            });
        };

        let english_url = row.en_url.as_deref().unwrap_or_default();

        if row.en_url.is_some() && !Self::is_external_url(english_url) {
            reject(
                CrumbField::EnUrl,
                FieldErrorKind::InvalidExternalUrl,
            );
        }

        // 法文链接沿用英文链接的值进行检查
        // TODO: 确认两种语言链接是否应当一致，否则改为检查 fr_url 本身
        if row.fr_url.is_some() && !Self::is_external_url(english_url) {
            reject(
                CrumbField::FrUrl,
                FieldErrorKind::InvalidExternalUrl,
            );
        }

        if let Some(label) = row.en_crumb.as_deref() {
            if !Self::is_breadcrumb_name(label) {
                reject(
                    CrumbField::EnCrumb,
                    FieldErrorKind::InvalidBreadcrumbName,
                );
            }
        }

        if let Some(label) = row.fr_crumb.as_deref() {
            if !Self::is_breadcrumb_name(label) {
                reject(
                    CrumbField::FrCrumb,
                    FieldErrorKind::InvalidBreadcrumbName,
                );
            }
        }

        errors
    }

    /// 粗略判断是否为外部链接：足够长且包含 "http"
    pub fn is_external_url(url: &str) -> bool {
        char_len(url) >= MIN_URL_LENGTH
            && contains_ignore_case(url, "http")
    }

    /// 面包屑名称至少两个字符
    pub fn is_breadcrumb_name(label: &str) -> bool {
        char_len(label) >= MIN_LABEL_LENGTH
    }
}
