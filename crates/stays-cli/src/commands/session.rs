//! Login and logout handlers.
//!
//! Without configured credentials, `login` prompts interactively for an
//! email and password instead of failing.

use secrecy::SecretString;

use stays_core::Storefront;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub async fn login(storefront: &Storefront, global: &GlobalOpts) -> Result<(), CliError> {
    match storefront.login().await {
        Ok(()) => {}
        Err(stays_core::CoreError::Config { .. }) => {
            // No credentials configured: fall back to a prompt.
            let email: String = dialoguer::Input::new()
                .with_prompt("Email")
                .interact_text()
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            let password = rpassword::prompt_password("Password: ")?;
            storefront
                .login_with(&email, &SecretString::from(password))
                .await?;
        }
        Err(e) => return Err(e.into()),
    }

    output::Printer::new(global).status("Logged in");
    Ok(())
}

pub async fn logout(storefront: &Storefront, global: &GlobalOpts) -> Result<(), CliError> {
    storefront.logout().await?;
    output::Printer::new(global).status("Logged out");
    Ok(())
}
