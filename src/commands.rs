//! 命令行子命令
//!
//! 调用表单的非交互式操作，打印确认信息或字段错误

use anyhow::Result;

use leading_crumbs::app::i18n::catalog::field_error;
use leading_crumbs::ui::app::SettingsForm;
use leading_crumbs::{CrumbRow, SubmitOutcome};

/// 验证失败时的退出码
const EXIT_REJECTED: i32 = 2;

/// 打印当前配置
pub fn show(form: &SettingsForm) -> Result<()> {
    println!("{}", form.overview()?);
    Ok(())
}

/// 在末尾增加一行并保存
pub fn add(form: &mut SettingsForm, row: CrumbRow) -> Result<()> {
    let outcome = form.append_entry(row)?;
    report(form, outcome)
}

/// 删除最后一行并保存
pub fn remove(form: &mut SettingsForm) -> Result<()> {
    let outcome = form.remove_last_entry()?;
    report(form, outcome)
}

/// 设置首页面包屑开关并保存
pub fn front_page(
    form: &mut SettingsForm,
    enabled: bool,
) -> Result<()> {
    let outcome = form.set_front_page_crumb(enabled)?;
    report(form, outcome)
}

fn report(form: &SettingsForm, outcome: SubmitOutcome) -> Result<()> {
    let locale = form.locale();
    match outcome {
        SubmitOutcome::Saved {
            notice, message, ..
        } => {
            println!("{notice}");
            println!("{message}");
            Ok(())
        }
        SubmitOutcome::Rejected(session) => {
            for error in session.errors() {
                eprintln!(
                    "{}: {}",
                    error.field.tree_name(error.row),
                    field_error(locale, error.kind)
                );
            }
            std::process::exit(EXIT_REJECTED);
        }
    }
}
