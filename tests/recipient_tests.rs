use fastfeet_api::application::{
    commands::recipients::{CreateRecipientCommand, RecipientInput, UpdateRecipientCommand},
    error::ApplicationError,
    queries::recipients::{ListRecipientSummariesQuery, ListRecipientsQuery},
};
use fastfeet_api::domain::recipient::RecipientId;
use fastfeet_api::domain::shared::PageRequest;

mod support;

use support::{RecipientBuilder, TestApp, UserBuilder, actor};

fn input(full_name: &str, email: &str) -> RecipientInput {
    RecipientInput {
        full_name: full_name.into(),
        email: email.into(),
        state: "RJ".into(),
        city: "Rio de Janeiro".into(),
        neighborhood: "Botafogo".into(),
        address: "Rua Voluntarios da Patria, 45".into(),
        zipcode: "22270-000".into(),
    }
}

/// 受取人を作成すると郵便番号が正規化されて返ることを確認する
#[tokio::test]
async fn create_recipient_returns_stored_record() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());

    let created = app
        .services
        .recipient_commands
        .create_recipient(
            &actor(&admin),
            CreateRecipientCommand {
                input: input("Carlos Pereira", "carlos@example.com"),
            },
        )
        .await
        .unwrap();

    assert_eq!(created.full_name, "Carlos Pereira");
    assert_eq!(created.city, "Rio de Janeiro");
    assert_eq!(created.zipcode, "22270000");
}

/// 既存のメールアドレスでの作成は Conflict になることを確認する
#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());
    app.seed_recipient(RecipientBuilder::default().email("taken@example.com").build());

    let err = app
        .services
        .recipient_commands
        .create_recipient(
            &actor(&admin),
            CreateRecipientCommand {
                input: input("Carlos Pereira", "taken@example.com"),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");
}

/// メールアドレスを変えない更新は重複扱いにならないことを確認する
#[tokio::test]
async fn update_keeping_same_email_succeeds() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());
    let recipient = app.seed_recipient(RecipientBuilder::default().build());

    let updated = app
        .services
        .recipient_commands
        .update_recipient(
            &actor(&admin),
            UpdateRecipientCommand {
                id: recipient.id,
                input: input("Maria Souza Lima", "maria@example.com"),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.full_name, "Maria Souza Lima");
    assert_eq!(updated.state, "RJ");
}

/// 他の受取人のメールアドレスへの変更は Conflict になることを確認する
#[tokio::test]
async fn update_to_foreign_email_is_conflict() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());
    let recipient = app.seed_recipient(RecipientBuilder::default().build());
    app.seed_recipient(
        RecipientBuilder::default()
            .full_name("Ana Costa")
            .email("ana@example.com")
            .build(),
    );

    let err = app
        .services
        .recipient_commands
        .update_recipient(
            &actor(&admin),
            UpdateRecipientCommand {
                id: recipient.id,
                input: input("Maria Souza", "ana@example.com"),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");
}

/// 配達員は受取人を管理できないことを確認する
#[tokio::test]
async fn delivery_man_cannot_manage_recipients() {
    let app = TestApp::new();
    let courier = app.seed_user(UserBuilder::delivery_man().build());

    let err = app
        .services
        .recipient_commands
        .create_recipient(
            &actor(&courier),
            CreateRecipientCommand {
                input: input("Carlos Pereira", "carlos@example.com"),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");

    let err = app
        .services
        .recipient_queries
        .list_recipients(&actor(&courier), ListRecipientsQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");
}

/// 不正なフィールドはまとめて報告されることを確認する
#[tokio::test]
async fn invalid_fields_are_reported_together() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());

    let mut bad = input("", "not-an-email");
    bad.zipcode = "abc".into();
    let err = app
        .services
        .recipient_commands
        .create_recipient(&actor(&admin), CreateRecipientCommand { input: bad })
        .await
        .unwrap_err();
    let ApplicationError::InvalidFields(fields) = err else {
        panic!("expected InvalidFields");
    };
    let names: Vec<_> = fields.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(names, ["fullName", "email", "zipcode"]);
}

/// 削除済みの受取人は取得も再削除もできないことを確認する
#[tokio::test]
async fn deleted_recipient_is_not_found() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());
    let recipient = app.seed_recipient(RecipientBuilder::default().build());
    let commands = &app.services.recipient_commands;

    commands
        .delete_recipient(&actor(&admin), recipient.id)
        .await
        .unwrap();

    let err = app
        .services
        .recipient_queries
        .get_recipient(&actor(&admin), recipient.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");

    let err = commands
        .delete_recipient(&actor(&admin), recipient.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");
}

/// 簡易一覧が名前とメールの部分一致で絞り込まれることを確認する
#[tokio::test]
async fn summaries_filter_by_name_or_email() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());
    app.seed_recipient(RecipientBuilder::default().build());
    app.seed_recipient(
        RecipientBuilder::default()
            .full_name("Ana Costa")
            .email("ana@souza.example")
            .build(),
    );
    app.seed_recipient(
        RecipientBuilder::default()
            .full_name("Pedro Alves")
            .email("pedro@example.com")
            .build(),
    );

    let page = app
        .services
        .recipient_queries
        .list_recipient_summaries(
            &actor(&admin),
            ListRecipientSummariesQuery {
                q: Some("  SOUZA ".into()),
                page: PageRequest::new(1, 10),
            },
        )
        .await
        .unwrap();
    let names: Vec<_> = page.data.iter().map(|s| s.full_name.as_str()).collect();
    assert_eq!(names, ["Ana Costa", "Maria Souza"]);
    assert_eq!(page.total, 2);
}

/// 一覧のページングが総件数とページ数を返すことを確認する
#[tokio::test]
async fn listing_reports_pagination_metadata() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());
    for n in 0..3 {
        app.seed_recipient(
            RecipientBuilder::default()
                .email(&format!("r{n}@example.com"))
                .build(),
        );
    }

    let page = app
        .services
        .recipient_queries
        .list_recipients(
            &actor(&admin),
            ListRecipientsQuery {
                page: PageRequest::new(2, 2),
            },
        )
        .await
        .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page_index, 2);
}

/// 存在しない受取人の更新は NotFound になることを確認する
#[tokio::test]
async fn update_unknown_recipient_is_not_found() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());

    let err = app
        .services
        .recipient_commands
        .update_recipient(
            &actor(&admin),
            UpdateRecipientCommand {
                id: RecipientId::generate(),
                input: input("Maria Souza", "maria@example.com"),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");
}
