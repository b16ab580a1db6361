/// 按字符计算长度
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// 忽略大小写判断是否包含子串
pub fn contains_ignore_case(
    haystack: &str,
    needle: &str,
) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

/// 按分隔规则拼接多行字段值
///
/// 非最后一行的每个值后接 `", "`，最后一行的每个值前加一个空格。
pub fn join_crumb_values(rows: &[Vec<&str>]) -> String {
    let mut output = String::new();
    let last = rows.len().saturating_sub(1);
    for (index, values) in rows.iter().enumerate() {
        for value in values {
            if index == last {
                output.push(' ');
                output.push_str(value);
            } else {
                output.push_str(value);
                output.push_str(", ");
            }
        }
    }
    output
}
