// LoginPage - root screen of the storefront

use crate::error::Result;
use crate::fixtures::User;
use crate::selector::Target;
use crate::session::Session;

#[derive(Debug, Clone)]
pub struct LoginPage {
    session: Session,
    username_input: Target,
    password_input: Target,
    login_button: Target,
    error_box: Target,
}

impl LoginPage {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            username_input: Target::css("#user-name"),
            password_input: Target::css("#password"),
            login_button: Target::css("#login-button"),
            error_box: Target::test_id("error"),
        }
    }

    /// Navigates to the application root and waits for the login form.
    pub async fn open(&self) -> Result<()> {
        self.session.goto("/").await?;
        self.session.expect_visible(&self.login_button).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        tracing::debug!(username, "logging in");
        self.session.fill(&self.username_input, username).await?;
        self.session.fill(&self.password_input, password).await?;
        self.session.click(&self.login_button).await
    }

    pub async fn login_as(&self, user: &User) -> Result<()> {
        self.login(&user.username, &user.password).await
    }

    pub async fn assert_error_contains(&self, text: &str) -> Result<()> {
        self.session.expect_visible(&self.error_box).await?;
        self.session.expect_contains_text(&self.error_box, text).await
    }

    /// Username, password and login button are all shown.
    pub async fn assert_on_login_page(&self) -> Result<()> {
        self.session.expect_visible(&self.username_input).await?;
        self.session.expect_visible(&self.password_input).await?;
        self.session.expect_visible(&self.login_button).await
    }
}
