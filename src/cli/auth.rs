use super::Console;
use crate::state::LoginForm;
use anyhow::Result;

pub async fn login(
    console: &mut Console,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let username = match username {
        Some(u) => u,
        None => {
            print!("Username: ");
            std::io::Write::flush(&mut std::io::stdout())?;
            let mut line = String::new();
            std::io::stdin().read_line(&mut line)?;
            line.trim().to_string()
        }
    };
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password: ")?,
    };

    let mut form = LoginForm::new(username, password);
    if !form.submit(&mut console.auth).await {
        let message = form.error.unwrap_or_default();
        anyhow::bail!("{}", message);
    }

    if let Some(user) = console.auth.user() {
        println!("Signed in as {}", user.username);
    }
    Ok(())
}

pub async fn logout(console: &mut Console) -> Result<()> {
    console.auth.logout().await;
    println!("Signed out");
    Ok(())
}

pub async fn whoami(console: &mut Console) -> Result<()> {
    console.require_login().await?;
    if let Some(user) = console.auth.user() {
        println!("{:<10} {}", "ID", user.id);
        println!("{:<10} {}", "USERNAME", user.username);
    }
    Ok(())
}
