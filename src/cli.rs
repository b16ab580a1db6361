use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use leading_crumbs::Locale;

/// 前置面包屑配置工具
#[derive(Parser, Debug)]
#[command(name = "leading-crumbs")]
#[command(about = "管理页面面包屑之前的前置面包屑（英文/法文）")]
#[command(version)]
pub struct Args {
    /// 配置目录（默认自动查找）
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// 界面语言（默认读取 LANG 等环境变量）
    #[arg(long, value_enum, global = true)]
    pub locale: Option<LocaleArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 启动图形界面（默认）
    Gui,

    /// 显示当前配置
    Show,

    /// 在末尾增加一行面包屑并保存
    Add {
        /// 英文名称
        #[arg(long, value_name = "NAME")]
        en_crumb: String,

        /// 英文链接
        #[arg(long, value_name = "URL")]
        en_url: String,

        /// 法文名称
        #[arg(long, value_name = "NAME")]
        fr_crumb: String,

        /// 法文链接
        #[arg(long, value_name = "URL")]
        fr_url: String,
    },

    /// 删除最后一行面包屑并保存（至少保留一行）
    Remove,

    /// 设置是否在首页显示当前页面的面包屑
    FrontPage {
        /// on 或 off
        #[arg(value_enum)]
        state: Toggle,
    },
}

/// 界面语言
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum LocaleArg {
    /// 英文
    En,
    /// 法文
    Fr,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::Fr => Locale::Fr,
        }
    }
}

/// 开关
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}
