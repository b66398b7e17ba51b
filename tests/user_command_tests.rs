use fastfeet_api::application::{
    commands::users::{BootstrapOwnerCommand, CreateUserCommand, LoginUserCommand},
    error::ApplicationError,
    ports::notification::Notification,
};
use fastfeet_api::domain::user::{Role, UserId};

mod support;

use support::{TEMPORARY_PASSWORD, TestApp, UserBuilder, actor, token_for};

fn login(cpf: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        cpf: cpf.into(),
        password: password.into(),
    }
}

fn new_courier() -> CreateUserCommand {
    CreateUserCommand {
        full_name: "Rafael Santos".into(),
        cpf: "987.654.321-00".into(),
        email: "Rafael@FastFeet.test".into(),
    }
}

/// 正しい資格情報でログインするとトークンが発行されることを確認する
#[tokio::test]
async fn login_with_valid_credentials_issues_token() {
    let app = TestApp::new();
    let owner = app.seed_user(UserBuilder::owner().password("correct-horse").build());

    let result = app
        .services
        .user_commands
        .login(login("529.982.247-25", "correct-horse"))
        .await
        .unwrap();
    assert_eq!(result.token.token, token_for(owner.id));
    assert_eq!(result.user.role, "OWNER");
    assert!(result.token.expires_in > 0);
}

/// パスワード誤りは NotFound ではなく InvalidCredentials になることを確認する
#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let app = TestApp::new();
    app.seed_user(UserBuilder::owner().password("correct-horse").build());

    let err = app
        .services
        .user_commands
        .login(login("52998224725", "wrong-horse"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidCredentials), "{err:?}");
}

/// 未登録の CPF でも同じ InvalidCredentials になることを確認する
#[tokio::test]
async fn unknown_cpf_is_invalid_credentials() {
    let app = TestApp::new();

    let err = app
        .services
        .user_commands
        .login(login("11144477735", "whatever1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidCredentials), "{err:?}");
}

/// ブロック済みユーザーはログインできないことを確認する
#[tokio::test]
async fn blocked_user_cannot_log_in() {
    let app = TestApp::new();
    app.seed_user(UserBuilder::delivery_man().password("secret123").blocked().build());

    let err = app
        .services
        .user_commands
        .login(login("12345678909", "secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::UserBlocked), "{err:?}");
}

/// 形式不正な CPF と短いパスワードはフィールドエラーになることを確認する
#[tokio::test]
async fn malformed_login_reports_fields() {
    let app = TestApp::new();

    let err = app
        .services
        .user_commands
        .login(login("123", "short"))
        .await
        .unwrap_err();
    let ApplicationError::InvalidFields(fields) = err else {
        panic!("expected InvalidFields");
    };
    let names: Vec<_> = fields.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(names, ["cpf", "password"]);
}

/// 配達員アカウント作成時に仮パスワード付きの通知が送られることを確認する
#[tokio::test]
async fn create_delivery_man_sends_temporary_password() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());

    let created = app
        .services
        .user_commands
        .create_delivery_man(&actor(&admin), new_courier())
        .await
        .unwrap();
    assert_eq!(created.role, "DELIVERY_MAN");
    assert_eq!(created.status, "ACTIVE");
    assert_eq!(created.email, "rafael@fastfeet.test");

    assert_eq!(
        app.notifications.sent(),
        vec![Notification::AccountCreated {
            email: "rafael@fastfeet.test".into(),
            full_name: "Rafael Santos".into(),
            temporary_password: TEMPORARY_PASSWORD.into(),
        }]
    );

    // 仮パスワードでそのままログインできる
    let session = app
        .services
        .user_commands
        .login(login("98765432100", TEMPORARY_PASSWORD))
        .await
        .unwrap();
    assert_eq!(session.user.id, created.id);
}

/// 配達員はアカウントを作成できないことを確認する
#[tokio::test]
async fn delivery_man_cannot_create_accounts() {
    let app = TestApp::new();
    let courier = app.seed_user(UserBuilder::delivery_man().build());

    let err = app
        .services
        .user_commands
        .create_admin(&actor(&courier), new_courier())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");
    assert!(app.notifications.sent().is_empty());
}

/// 既存の CPF やメールでの作成は Conflict になることを確認する
#[tokio::test]
async fn duplicate_identity_is_conflict() {
    let app = TestApp::new();
    let owner = app.seed_user(UserBuilder::owner().build());

    let err = app
        .services
        .user_commands
        .create_admin(
            &actor(&owner),
            CreateUserCommand {
                full_name: "Outra Pessoa".into(),
                cpf: "98765432100".into(),
                email: "joana@fastfeet.test".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");

    let err = app
        .services
        .user_commands
        .create_admin(
            &actor(&owner),
            CreateUserCommand {
                full_name: "Outra Pessoa".into(),
                cpf: "52998224725".into(),
                email: "outra@fastfeet.test".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");
}

/// ブロックと解除の往復、および自分自身のブロック禁止を確認する
#[tokio::test]
async fn block_and_unblock_round_trip() {
    let app = TestApp::new();
    let admin = app.seed_user(UserBuilder::admin().build());
    let courier = app.seed_user(UserBuilder::delivery_man().build());
    let commands = &app.services.user_commands;

    let blocked = commands.block_user(&actor(&admin), courier.id).await.unwrap();
    assert_eq!(blocked.status, "BLOCKED");

    // ブロック済みの主体はどの操作も拒否される
    let err = app
        .services
        .user_queries
        .me(&actor(&courier))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::UserBlocked), "{err:?}");

    let err = commands.block_user(&actor(&admin), courier.id).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "{err:?}");

    let active = commands.unblock_user(&actor(&admin), courier.id).await.unwrap();
    assert_eq!(active.status, "ACTIVE");

    let err = commands.block_user(&actor(&admin), admin.id).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");
}

/// 管理者はオーナーをブロックも削除もできないことを確認する
#[tokio::test]
async fn admin_cannot_block_or_delete_owner() {
    let app = TestApp::new();
    let owner = app.seed_user(UserBuilder::owner().build());
    let admin = app.seed_user(UserBuilder::admin().build());
    let commands = &app.services.user_commands;

    let err = commands.block_user(&actor(&admin), owner.id).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");

    let err = commands.unblock_user(&actor(&admin), owner.id).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");

    let err = commands.delete_user(&actor(&admin), owner.id).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)), "{err:?}");
    assert!(!app.users.is_deleted(owner.id));

    // オーナーは引き続きログインできる
    let session = commands
        .login(login("52998224725", "secret123"))
        .await
        .unwrap();
    assert_eq!(session.user.status, "ACTIVE");
}

/// オーナーは管理者をブロックおよび削除できることを確認する
#[tokio::test]
async fn owner_can_block_and_delete_admin() {
    let app = TestApp::new();
    let owner = app.seed_user(UserBuilder::owner().build());
    let admin = app.seed_user(UserBuilder::admin().build());
    let commands = &app.services.user_commands;

    let blocked = commands.block_user(&actor(&owner), admin.id).await.unwrap();
    assert_eq!(blocked.status, "BLOCKED");

    commands.delete_user(&actor(&owner), admin.id).await.unwrap();
    assert!(app.users.is_deleted(admin.id));
}

/// 削除されたユーザーのトークンは認証エラーになることを確認する
#[tokio::test]
async fn deleted_user_session_is_unauthorized() {
    let app = TestApp::new();
    let owner = app.seed_user(UserBuilder::owner().build());
    let courier = app.seed_user(UserBuilder::delivery_man().build());

    app.services
        .user_commands
        .delete_user(&actor(&owner), courier.id)
        .await
        .unwrap();
    assert!(app.users.is_deleted(courier.id));

    let err = app
        .services
        .user_queries
        .me(&actor(&courier))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)), "{err:?}");

    let err = app
        .services
        .user_commands
        .delete_user(&actor(&owner), UserId::generate())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");
}

/// オーナーの初期投入はユーザーが存在しない場合のみ行われることを確認する
#[tokio::test]
async fn bootstrap_owner_only_on_empty_installation() {
    let app = TestApp::new();
    let command = || BootstrapOwnerCommand {
        full_name: "Dona Da Loja".into(),
        cpf: "71428793860".into(),
        email: "owner@fastfeet.test".into(),
        password: "owner-pass".into(),
    };

    let created = app
        .services
        .user_commands
        .bootstrap_owner(command())
        .await
        .unwrap()
        .expect("owner created");
    assert_eq!(created.role, Role::Owner.as_str());

    let second = app
        .services
        .user_commands
        .bootstrap_owner(command())
        .await
        .unwrap();
    assert!(second.is_none());

    // 初期パスワードでログインできる
    app.services
        .user_commands
        .login(login("71428793860", "owner-pass"))
        .await
        .unwrap();
}
