//! 界面文案（英文 / 法文）

use super::locale::Locale;
use crate::app::config::types::CrumbField;
use crate::app::config::validator::FieldErrorKind;

/// 静态文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    /// 窗口和页面标题
    Title,
    /// 表单说明
    Description,
    /// 首页面包屑开关
    FrontPageCrumb,
    /// 面包屑字段组标题
    FieldsetTitle,
    /// 增加一行
    AddOne,
    /// 删除一行
    RemoveOne,
    /// 保存
    Save,
    /// 验证失败提示
    FixErrors,
    /// 保存成功提示
    ConfigSaved,
}

impl Text {
    /// 按语言取文案
    pub fn in_locale(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Text::Title, Locale::En) => "Leading breadcrumbs",
            (Text::Title, Locale::Fr) => "Fils d'Ariane de tête",
            (Text::Description, Locale::En) => {
                "Add and remove leading breadcrumbs using the buttons below."
            }
            (Text::Description, Locale::Fr) => {
                "Ajoutez et retirez des fils d'Ariane de tête à l'aide des boutons ci-dessous."
            }
            (Text::FrontPageCrumb, Locale::En) => {
                "Display current page crumb on the front page."
            }
            (Text::FrontPageCrumb, Locale::Fr) => {
                "Afficher le fil d'Ariane de la page courante sur la page d'accueil."
            }
            (Text::FieldsetTitle, Locale::En) => {
                "Breadcrumbs for this website"
            }
            (Text::FieldsetTitle, Locale::Fr) => {
                "Fils d'Ariane de ce site Web"
            }
            (Text::AddOne, Locale::En) => "Add one more",
            (Text::AddOne, Locale::Fr) => "En ajouter un",
            (Text::RemoveOne, Locale::En) => "Remove one",
            (Text::RemoveOne, Locale::Fr) => "En retirer un",
            (Text::Save, Locale::En) => "Save configuration",
            (Text::Save, Locale::Fr) => {
                "Enregistrer la configuration"
            }
            (Text::FixErrors, Locale::En) => {
                "The configuration was not saved. Please correct the errors below."
            }
            (Text::FixErrors, Locale::Fr) => {
                "La configuration n'a pas été enregistrée. Veuillez corriger les erreurs ci-dessous."
            }
            (Text::ConfigSaved, Locale::En) => {
                "The configuration options have been saved."
            }
            (Text::ConfigSaved, Locale::Fr) => {
                "Les options de configuration ont été enregistrées."
            }
        }
    }
}

/// 行内字段标题，带行下标
pub fn field_title(
    locale: Locale,
    field: CrumbField,
    row: usize,
) -> String {
    let title = match (field, locale) {
        (CrumbField::EnCrumb, Locale::En) => {
            "English breadcrumb name"
        }
        (CrumbField::EnUrl, Locale::En) => {
            "English breadcrumb URL or relative path"
        }
        (CrumbField::FrCrumb, Locale::En) => {
            "French breadcrumb name"
        }
        (CrumbField::FrUrl, Locale::En) => {
            "French breadcrumb URL or relative path"
        }
        (CrumbField::EnCrumb, Locale::Fr) => {
            "Nom du fil d'Ariane anglais"
        }
        (CrumbField::EnUrl, Locale::Fr) => {
            "URL ou chemin relatif du fil d'Ariane anglais"
        }
        (CrumbField::FrCrumb, Locale::Fr) => {
            "Nom du fil d'Ariane français"
        }
        (CrumbField::FrUrl, Locale::Fr) => {
            "URL ou chemin relatif du fil d'Ariane français"
        }
    };
    format!("{title} {row}")
}

/// 字段错误文案
pub fn field_error(
    locale: Locale,
    kind: FieldErrorKind,
) -> &'static str {
    match (kind, locale) {
        (FieldErrorKind::InvalidExternalUrl, Locale::En) => {
            "Please provide a valid external url."
        }
        (FieldErrorKind::InvalidExternalUrl, Locale::Fr) => {
            "Veuillez fournir une URL externe valide."
        }
        (FieldErrorKind::InvalidBreadcrumbName, Locale::En) => {
            "Please provide a valid breadcrumb name."
        }
        (FieldErrorKind::InvalidBreadcrumbName, Locale::Fr) => {
            "Veuillez fournir un nom de fil d'Ariane valide."
        }
    }
}

/// 保存成功后的确认信息
pub fn saved_message(
    locale: Locale,
    english: &str,
    french: &str,
) -> String {
    match locale {
        Locale::En => format!(
            "These breadcrumbs are going to be added: {english} and french breadcrumbs: {french}"
        ),
        Locale::Fr => format!(
            "Ces fils d'Ariane vont être ajoutés : {english} et fils d'Ariane français : {french}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_title_carries_row_index() {
        assert_eq!(
            field_title(Locale::En, CrumbField::EnUrl, 3),
            "English breadcrumb URL or relative path 3"
        );
        assert_eq!(
            field_title(Locale::Fr, CrumbField::FrCrumb, 0),
            "Nom du fil d'Ariane français 0"
        );
    }

    #[test]
    fn test_title_and_saved_notice_are_localized() {
        assert_eq!(Text::Title.in_locale(Locale::En), "Leading breadcrumbs");
        assert_eq!(
            Text::Title.in_locale(Locale::Fr),
            "Fils d'Ariane de tête"
        );
        assert_eq!(
            Text::ConfigSaved.in_locale(Locale::Fr),
            "Les options de configuration ont été enregistrées."
        );
    }

    #[test]
    fn test_field_error_matches_kind_display() {
        for kind in [
            FieldErrorKind::InvalidExternalUrl,
            FieldErrorKind::InvalidBreadcrumbName,
        ] {
            assert_eq!(
                field_error(Locale::En, kind),
                kind.to_string()
            );
        }
    }
}
