//! 保存成功后的确认信息

use crate::app::config::types::CrumbLink;
use crate::app::i18n::catalog::saved_message;
use crate::app::i18n::Locale;
use crate::utils::helpers::join_crumb_values;

/// 将一种语言的全部条目拼接为一行文本
pub fn describe_crumbs<C: CrumbLink>(entries: &[C]) -> String {
    let rows: Vec<Vec<&str>> = entries
        .iter()
        .map(CrumbLink::filled_values)
        .collect();
    join_crumb_values(&rows)
}

/// 生成列出英文、法文面包屑的确认信息
pub fn summarize<E: CrumbLink, F: CrumbLink>(
    locale: Locale,
    english: &[E],
    french: &[F],
) -> String {
    saved_message(
        locale,
        &describe_crumbs(english),
        &describe_crumbs(french),
    )
}
