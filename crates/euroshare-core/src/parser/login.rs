//! Login response inspection
//!
//! The site answers a rejected login by rendering the login form again,
//! with the same 200 status as a successful one.

use scraper::Html;

use crate::error::Result;
use crate::parser::selector;

/// True when the page still carries the login form with its password field
///
/// Password fields in other forms, such as a change-password box on the
/// account page, do not count.
pub fn has_login_form(html: &str) -> Result<bool> {
    let document = Html::parse_document(html);
    let password = selector(
        r#"form#frm-prihlaseni input[type="password"], form[action*="prihlaseni-submit"] input[type="password"]"#,
    )?;
    Ok(document.select(&password).next().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_detected() {
        let html = r#"
            <form id="frm-prihlaseni" action="/?do=prihlaseni-submit" method="post">
                <input type="text" name="username">
                <input type="password" name="password">
                <input type="submit" name="send" value="PRIHLÁSENIE">
            </form>
        "#;
        assert!(has_login_form(html).unwrap());
    }

    #[test]
    fn test_logged_in_page_has_no_form() {
        let html = r#"
            <ul><li class="price-list"><a>Kredit: 5 €</a></li></ul>
            <a href="/?do=odhlasit">Odhlásiť</a>
        "#;
        assert!(!has_login_form(html).unwrap());
    }

    #[test]
    fn test_other_password_forms_are_ignored() {
        let html = r#"
            <ul><li class="price-list"><a>Kredit: 5 €</a></li></ul>
            <form id="frm-zmenaHesla" action="/user/zmena-hesla" method="post">
                <input type="password" name="password">
                <input type="password" name="password2">
            </form>
        "#;
        assert!(!has_login_form(html).unwrap());
    }

    #[test]
    fn test_login_form_matched_by_action() {
        let html = r#"
            <form action="/?do=prihlaseni-submit" method="post">
                <input type="password" name="password">
            </form>
        "#;
        assert!(has_login_form(html).unwrap());
    }
}
