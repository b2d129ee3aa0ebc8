//! Shared email content templates
//!
//! Canonical content generators for activation and reset mail, used by
//! both production (SES) and mock email services.

/// Plain-text body for the account-activation email.
pub fn account_activation_text(name: &str, code: &str, link: &str) -> String {
    format!(
        "Hi {},\n\n\
        Welcome to Adperk! Confirm your email address to activate your account.\n\n\
        Your activation code: {}\n\n\
        Or click the link below:\n\
        {}\n\n\
        The link expires shortly; request a new one from the login page if it has lapsed.\n\n\
        Thanks,\n\
        The Adperk Team",
        name, code, link
    )
}

/// Styled HTML body for the account-activation email.
pub fn account_activation_html(name: &str, code: &str, link: &str) -> String {
    format!(
        r#"
            <html>
            <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <h2 style="color: #007cba;">Activate your Adperk account</h2>

                    <p>Hi {name},</p>

                    <p>Welcome to Adperk! Confirm your email address to activate your account.</p>

                    <p style="font-size: 24px; letter-spacing: 4px; text-align: center; font-weight: bold;">{code}</p>

                    <div style="text-align: center; margin: 30px 0;">
                        <a href="{link}"
                           style="background-color: #007cba; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px; display: inline-block; font-weight: bold;">
                            Activate Account
                        </a>
                    </div>

                    <p>Or copy and paste this link in your browser:</p>
                    <p style="background-color: #f5f5f5; padding: 10px; border-radius: 4px; word-break: break-all;">
                        <a href="{link}">{link}</a>
                    </p>

                    <p style="color: #666; font-size: 14px;">
                        <em>The link expires shortly; request a new one from the login page if it has lapsed.</em>
                    </p>

                    <hr style="border: none; border-top: 1px solid #eee; margin: 30px 0;">

                    <p style="color: #666; font-size: 12px;">
                        If you did not create an Adperk account, you can ignore this mail.<br>
                        Thanks, The Adperk Team
                    </p>
                </div>
            </body>
            </html>
            "#,
        name = name,
        code = code,
        link = link
    )
}

/// Plain-text body for the password-reset email.
pub fn password_reset_text(name: &str, link: &str) -> String {
    format!(
        "Hi {},\n\n\
        We received a request to reset your Adperk password.\n\n\
        Click the link below to choose a new password:\n\
        {}\n\n\
        If you did not request a reset, you can ignore this mail; your password is unchanged.\n\n\
        Thanks,\n\
        The Adperk Team",
        name, link
    )
}

/// Styled HTML body for the password-reset email.
pub fn password_reset_html(name: &str, link: &str) -> String {
    format!(
        r#"
            <html>
            <body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
                <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
                    <h2 style="color: #007cba;">Reset your Adperk password</h2>

                    <p>Hi {name},</p>

                    <p>We received a request to reset your Adperk password.</p>

                    <div style="text-align: center; margin: 30px 0;">
                        <a href="{link}"
                           style="background-color: #007cba; color: white; padding: 12px 24px; text-decoration: none; border-radius: 4px; display: inline-block; font-weight: bold;">
                            Choose New Password
                        </a>
                    </div>

                    <p>Or copy and paste this link in your browser:</p>
                    <p style="background-color: #f5f5f5; padding: 10px; border-radius: 4px; word-break: break-all;">
                        <a href="{link}">{link}</a>
                    </p>

                    <hr style="border: none; border-top: 1px solid #eee; margin: 30px 0;">

                    <p style="color: #666; font-size: 12px;">
                        If you did not request a reset, you can ignore this mail; your password is unchanged.<br>
                        Thanks, The Adperk Team
                    </p>
                </div>
            </body>
            </html>
            "#,
        name = name,
        link = link
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_text_contains_all_fields() {
        let text = account_activation_text("Alice", "123456", "https://example.com/login/tok");
        assert!(text.contains("Alice"));
        assert!(text.contains("123456"));
        assert!(text.contains("https://example.com/login/tok"));
    }

    #[test]
    fn test_activation_html_contains_all_fields() {
        let html = account_activation_html("Alice", "123456", "https://example.com/login/tok");
        assert!(html.contains("Alice"));
        assert!(html.contains("123456"));
        assert!(html.contains("https://example.com/login/tok"));
    }

    #[test]
    fn test_reset_text_contains_all_fields() {
        let text = password_reset_text("Bob", "https://example.com/resetpassword/tok");
        assert!(text.contains("Bob"));
        assert!(text.contains("https://example.com/resetpassword/tok"));
    }

    #[test]
    fn test_reset_html_contains_link() {
        let html = password_reset_html("Bob", "https://example.com/resetpassword/tok");
        assert!(html.contains("https://example.com/resetpassword/tok"));
    }
}
