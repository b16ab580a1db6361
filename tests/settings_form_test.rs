//! 面包屑设置表单测试
//!
//! 测试行数推导、增删行、验证和保存流程

use leading_crumbs::app::config::manager::{
    ConfigStore, MemoryConfigStore, TomlConfigStore,
};
use leading_crumbs::app::config::paths::ConfigPaths;
use leading_crumbs::{
    BreadcrumbSettings, BreadcrumbSettingsForm, CrumbField,
    CrumbRow, EnglishCrumb, FieldErrorKind, FixedLanguage,
    FormSubmission, Locale, SubmitOutcome, SETTINGS_NAME,
};
use tempfile::TempDir;

type MemoryForm =
    BreadcrumbSettingsForm<MemoryConfigStore, FixedLanguage>;

fn form_with(settings: Option<BreadcrumbSettings>) -> MemoryForm {
    let store = match settings {
        Some(settings) => {
            MemoryConfigStore::with_document(SETTINGS_NAME, settings)
        }
        None => MemoryConfigStore::new(),
    };
    BreadcrumbSettingsForm::new(store, FixedLanguage(Locale::En))
}

fn named_settings(count: usize) -> BreadcrumbSettings {
    BreadcrumbSettings {
        en: (0..count)
            .map(|i| EnglishCrumb {
                label: Some(format!("Crumb {i}")),
                url: Some(format!("https://example.org/{i}")),
            })
            .collect(),
        ..Default::default()
    }
}

fn valid_row(label: &str, url: &str) -> CrumbRow {
    CrumbRow::filled(label, url, format!("{label} fr"), url)
}

#[test]
fn test_row_editors_match_persisted_labels() {
    for count in 1..=5 {
        let form = form_with(Some(named_settings(count)));
        let session = form.open_session().unwrap();
        let view = form.build(&session).unwrap();

        assert_eq!(session.row_count(), count);
        assert_eq!(view.crumbs.row_count(), count);
        for (index, row) in view.crumbs.rows.iter().enumerate() {
            assert_eq!(row.index, index);
            assert_eq!(row.fields.len(), 4);
        }
    }
}

#[test]
fn test_first_load_defaults() {
    let form = form_with(None);
    let session = form.open_session().unwrap();
    let view = form.build(&session).unwrap();

    assert_eq!(view.crumbs.row_count(), 1);
    assert!(view.front_page_crumb.value);
    assert!(!view.crumbs.can_remove());
    assert!(view.crumbs.rows[0]
        .fields
        .iter()
        .all(|field| field.value.is_empty()));
}

#[test]
fn test_fields_prefilled_and_addressable() {
    let settings = BreadcrumbSettings {
        front_page_crumb: Some(false),
        en: vec![EnglishCrumb {
            label: Some("Home".to_string()),
            url: Some("https://example.org".to_string()),
        }],
        fr: Vec::new(),
    };
    let form = form_with(Some(settings));
    let session = form.open_session().unwrap();
    let view = form.build(&session).unwrap();

    assert!(!view.front_page_crumb.value);
    let en_crumb = view.field("pre_breadcrumbs[0][en_crumb]").unwrap();
    assert_eq!(en_crumb.value, "Home");
    assert_eq!(en_crumb.title, "English breadcrumb name 0");
    let fr_url = view.field("pre_breadcrumbs[0][fr_url]").unwrap();
    assert_eq!(fr_url.value, "");
    assert_eq!(
        fr_url.title,
        "French breadcrumb URL or relative path 0"
    );
}

#[test]
fn test_add_row_increments_by_one() {
    let form = form_with(None);
    let mut session = form.open_session().unwrap();

    for expected in 2..=6 {
        let rows = form.add_row(&mut session, None).unwrap();
        assert_eq!(session.row_count(), expected);
        assert_eq!(rows.row_count(), expected);
        assert!(rows.can_remove());
    }
}

#[test]
fn test_remove_row_never_below_one() {
    let form = form_with(Some(named_settings(2)));
    let mut session = form.open_session().unwrap();

    let rows = form.remove_row(&mut session, None).unwrap();
    assert_eq!(rows.row_count(), 1);
    assert!(!rows.can_remove());

    for _ in 0..3 {
        let rows = form.remove_row(&mut session, None).unwrap();
        assert_eq!(rows.row_count(), 1);
    }
    assert_eq!(session.row_count(), 1);
}

#[test]
fn test_add_row_preserves_unsaved_edits() {
    let form = form_with(Some(named_settings(1)));
    let mut session = form.open_session().unwrap();
    let mut view = form.build(&session).unwrap();

    *view.crumbs.rows[0]
        .value_mut(CrumbField::EnCrumb)
        .unwrap() = "Edited".to_string();
    view.front_page_crumb.value = false;

    let rows = form
        .add_row(&mut session, Some(view.to_submission()))
        .unwrap();
    assert_eq!(rows.rows[0].fields[0].value, "Edited");
    assert_eq!(rows.rows[1].fields[0].value, "");

    // 整页重建时开关也保留未保存的值
    let rebuilt = form.build(&session).unwrap();
    assert!(!rebuilt.front_page_crumb.value);
}

#[test]
fn test_add_and_remove_do_not_touch_store() {
    let form = form_with(None);
    let mut session = form.open_session().unwrap();

    form.add_row(&mut session, None).unwrap();
    form.remove_row(&mut session, None).unwrap();

    assert!(form.store().get(SETTINGS_NAME).unwrap().is_none());
}

#[test]
fn test_url_validation() {
    let form = form_with(None);

    let rejected = form.validate(&FormSubmission::new(
        true,
        vec![CrumbRow {
            en_url: Some("short".to_string()),
            ..Default::default()
        }],
    ));
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].field, CrumbField::EnUrl);
    assert_eq!(rejected[0].kind, FieldErrorKind::InvalidExternalUrl);

    let accepted = form.validate(&FormSubmission::new(
        true,
        vec![CrumbRow {
            en_url: Some("http://example.com/a".to_string()),
            ..Default::default()
        }],
    ));
    assert!(accepted.is_empty());
}

#[test]
fn test_label_validation() {
    let form = form_with(None);

    let rejected = form.validate(&FormSubmission::new(
        true,
        vec![CrumbRow {
            en_crumb: Some("A".to_string()),
            ..Default::default()
        }],
    ));
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].field, CrumbField::EnCrumb);
    assert_eq!(
        rejected[0].kind,
        FieldErrorKind::InvalidBreadcrumbName
    );

    let accepted = form.validate(&FormSubmission::new(
        true,
        vec![CrumbRow {
            en_crumb: Some("Ab".to_string()),
            ..Default::default()
        }],
    ));
    assert!(accepted.is_empty());
}

#[test]
fn test_french_url_uses_english_url_value() {
    let form = form_with(None);
    let errors = form.validate(&FormSubmission::new(
        true,
        vec![CrumbRow {
            fr_url: Some("http://example.com/fr".to_string()),
            en_url: Some("bad".to_string()),
            ..Default::default()
        }],
    ));
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![CrumbField::EnUrl, CrumbField::FrUrl]);
}

#[test]
fn test_rejected_submission_changes_nothing() {
    let original = named_settings(1);
    let mut form = form_with(Some(original.clone()));
    let session = form.open_session().unwrap();

    let outcome = form
        .submit(
            session,
            FormSubmission::new(
                false,
                vec![
                    valid_row("Home", "http://site/x"),
                    CrumbRow::filled("A", "short", "B", "short"),
                ],
            ),
        )
        .unwrap();

    assert!(!outcome.is_saved());
    assert_eq!(outcome.errors().len(), 4);
    assert!(outcome.errors().iter().all(|e| e.row == 1));
    assert_eq!(
        form.store().get(SETTINGS_NAME).unwrap(),
        Some(original)
    );

    // 重新渲染时错误显示在对应字段上
    let SubmitOutcome::Rejected(session) = outcome else {
        panic!("submission should be rejected");
    };
    let view = form.build(&session).unwrap();
    assert!(view.has_errors());
    let field = view.field("pre_breadcrumbs[1][en_url]").unwrap();
    assert_eq!(field.value, "short");
    assert_eq!(
        field.error.as_deref(),
        Some("Please provide a valid external url.")
    );
    assert!(view
        .field("pre_breadcrumbs[0][en_url]")
        .unwrap()
        .error
        .is_none());
}

#[test]
fn test_submit_persists_rows_in_order() {
    let mut form = form_with(None);
    let session = form.open_session().unwrap();

    let outcome = form
        .submit(
            session,
            FormSubmission::new(
                true,
                vec![
                    valid_row("Home", "http://site/x"),
                    valid_row("Docs", "http://site/y"),
                ],
            ),
        )
        .unwrap();
    assert!(outcome.is_saved());

    let stored = form.store().get(SETTINGS_NAME).unwrap().unwrap();
    assert_eq!(stored.en.len(), 2);
    assert_eq!(stored.fr.len(), 2);
    assert_eq!(stored.en[0].label.as_deref(), Some("Home"));
    assert_eq!(stored.en[0].url.as_deref(), Some("http://site/x"));
    assert_eq!(stored.en[1].label.as_deref(), Some("Docs"));
    assert_eq!(stored.en[1].url.as_deref(), Some("http://site/y"));
    assert_eq!(stored.fr[1].label.as_deref(), Some("Docs fr"));
}

#[test]
fn test_confirmation_message() {
    let mut form = form_with(None);
    let session = form.open_session().unwrap();

    let outcome = form
        .submit(
            session,
            FormSubmission::new(
                true,
                vec![
                    CrumbRow::filled("Home", "http://site/x", "Accueil", "http://site/fr/x"),
                    CrumbRow::filled("Docs", "http://site/y", "Aide", "http://site/fr/y"),
                ],
            ),
        )
        .unwrap();

    let SubmitOutcome::Saved {
        notice, message, ..
    } = outcome
    else {
        panic!("submission should be saved");
    };
    assert_eq!(notice, "The configuration options have been saved.");
    assert_eq!(
        message,
        "These breadcrumbs are going to be added: \
         Home, http://site/x,  Docs http://site/y \
         and french breadcrumbs: \
         Accueil, http://site/fr/x,  Aide http://site/fr/y"
    );
}

#[test]
fn test_front_page_crumb_unchecked_is_persisted() {
    let mut form = form_with(None);
    let session = form.open_session().unwrap();

    form.submit(
        session,
        FormSubmission::new(
            false,
            vec![valid_row("Home", "http://site/x")],
        ),
    )
    .unwrap();

    let stored = form.store().get(SETTINGS_NAME).unwrap().unwrap();
    assert_eq!(stored.front_page_crumb, Some(false));

    let session = form.open_session().unwrap();
    let view = form.build(&session).unwrap();
    assert!(!view.front_page_crumb.value);
}

#[test]
fn test_reload_after_save_recomputes_row_count() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ConfigPaths::with_dir(temp_dir.path()).unwrap();
    let rows: Vec<_> = (0..3)
        .map(|i| valid_row(&format!("Crumb {i}"), "http://site/page"))
        .collect();

    {
        let mut form = BreadcrumbSettingsForm::new(
            TomlConfigStore::new(paths.clone()),
            FixedLanguage(Locale::En),
        );
        let mut session = form.open_session().unwrap();
        form.add_row(&mut session, None).unwrap();
        form.add_row(&mut session, None).unwrap();
        let outcome = form
            .submit(session, FormSubmission::new(true, rows))
            .unwrap();
        assert!(outcome.is_saved());
    }

    // 新的表单实例，没有任何内存中的会话
    let form = BreadcrumbSettingsForm::new(
        TomlConfigStore::new(paths),
        FixedLanguage(Locale::En),
    );
    let session = form.open_session().unwrap();
    assert_eq!(session.row_count(), 3);
    let view = form.build(&session).unwrap();
    assert_eq!(view.crumbs.rows[2].fields[0].value, "Crumb 2");
}

#[test]
fn test_french_locale_prose() {
    let form = BreadcrumbSettingsForm::new(
        MemoryConfigStore::new(),
        FixedLanguage(Locale::Fr),
    );
    let session = form.open_session().unwrap();
    let view = form.build(&session).unwrap();

    assert_eq!(view.crumbs.add_label, "En ajouter un");
    assert_eq!(
        view.crumbs.rows[0].fields[0].title,
        "Nom du fil d'Ariane anglais 0"
    );
    // 语言只影响文案，不影响结构
    assert_eq!(view.crumbs.row_count(), 1);
    assert!(view.front_page_crumb.value);
}

fn saved_form(rows: Vec<CrumbRow>) -> MemoryForm {
    let mut form = form_with(None);
    let session = form.open_session().unwrap();
    let outcome = form
        .submit(session, FormSubmission::new(true, rows))
        .unwrap();
    assert!(outcome.is_saved());
    form
}

#[test]
fn test_append_entry_on_empty_store() {
    let mut form = form_with(None);

    let outcome = form
        .append_entry(CrumbRow::filled(
            "Home",
            "https://example.org",
            "Accueil",
            "https://example.org/fr",
        ))
        .unwrap();
    assert!(outcome.is_saved(), "errors: {:?}", outcome.errors());

    let stored = form.store().get(SETTINGS_NAME).unwrap().unwrap();
    assert_eq!(stored.en.len(), 1);
    assert_eq!(stored.en[0].label.as_deref(), Some("Home"));
    assert_eq!(
        stored.fr[0].url.as_deref(),
        Some("https://example.org/fr")
    );
    assert_eq!(form.open_session().unwrap().row_count(), 1);
}

#[test]
fn test_append_entry_on_populated_store() {
    let mut form = saved_form(vec![
        valid_row("Home", "http://site/x"),
        valid_row("Docs", "http://site/y"),
    ]);

    let outcome = form
        .append_entry(valid_row("Blog", "http://site/z"))
        .unwrap();
    assert!(outcome.is_saved());

    let overview = form.overview().unwrap();
    assert_eq!(overview.row_count, 3);
    let labels: Vec<_> = overview
        .entries
        .iter()
        .map(|entry| entry.english_label.as_str())
        .collect();
    assert_eq!(labels, ["Home", "Docs", "Blog"]);
}

#[test]
fn test_append_invalid_entry_is_rejected() {
    let mut form = saved_form(vec![valid_row("Home", "http://site/x")]);

    let outcome = form
        .append_entry(CrumbRow::filled("B", "short", "Bfr", "short"))
        .unwrap();
    let SubmitOutcome::Rejected(session) = outcome else {
        panic!("entry should be rejected");
    };
    assert!(session.errors().iter().all(|e| e.row == 1));
    assert_eq!(form.overview().unwrap().row_count, 1);
}

#[test]
fn test_remove_last_entry() {
    let mut form = saved_form(vec![
        valid_row("Home", "http://site/x"),
        valid_row("Docs", "http://site/y"),
    ]);

    assert!(form.remove_last_entry().unwrap().is_saved());
    let overview = form.overview().unwrap();
    assert_eq!(overview.row_count, 1);
    assert_eq!(overview.entries.len(), 1);
    assert_eq!(overview.entries[0].english_label, "Home");

    // 只剩一行时保持不变
    assert!(form.remove_last_entry().unwrap().is_saved());
    assert_eq!(form.overview().unwrap().entries.len(), 1);
}

#[test]
fn test_remove_last_entry_on_empty_store() {
    let mut form = form_with(None);

    assert!(form.remove_last_entry().unwrap().is_saved());
    let stored = form.store().get(SETTINGS_NAME).unwrap().unwrap();
    assert!(stored.en.is_empty());
    assert!(stored.fr.is_empty());
}

#[test]
fn test_set_front_page_crumb() {
    let mut form = form_with(None);
    assert!(form.set_front_page_crumb(false).unwrap().is_saved());
    assert!(!form.overview().unwrap().front_page_crumb);

    let mut form = saved_form(vec![valid_row("Home", "http://site/x")]);
    assert!(form.set_front_page_crumb(false).unwrap().is_saved());
    let overview = form.overview().unwrap();
    assert!(!overview.front_page_crumb);
    assert_eq!(overview.entries[0].english_label, "Home");
}

#[test]
fn test_overview_lists_entries() {
    let form = saved_form(vec![valid_row("Home", "http://site/x")]);

    assert_eq!(
        form.overview().unwrap().to_string(),
        "front_page_crumb: true\n\
         rows: 1\n\
         [0] en: Home <http://site/x> | fr: Home fr <http://site/x>"
    );
}
