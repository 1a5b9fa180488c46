use eq_types::SiteConfig;

/// Optional sender details collected by the e-mail variant of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
}

/// `https://<host>/<recipient>?text=<message>`
pub fn messaging_link(cfg: &SiteConfig, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        cfg.messaging_host.trim_end_matches('/'),
        cfg.messaging_recipient,
        urlencoding::encode(message)
    )
}

pub fn email_body(contact: &ContactDetails, message: &str) -> String {
    let mut header = Vec::new();
    let name = contact.name.trim();
    let email = contact.email.trim();
    if !name.is_empty() {
        header.push(format!("Nome: {name}"));
    }
    if !email.is_empty() {
        header.push(format!("E-mail: {email}"));
    }
    if header.is_empty() {
        return message.to_owned();
    }
    format!("{}\n\n{}", header.join("\n"), message)
}

pub fn mailto_link(cfg: &SiteConfig, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        cfg.contact_email,
        urlencoding::encode(&cfg.email_subject),
        urlencoding::encode(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            messaging_recipient: "5511912345678".into(),
            contact_email: "vendas@example.com".into(),
            email_subject: "Orçamento".into(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn messaging_link_encodes_text() {
        let link = messaging_link(&config(), "Espaço: 25–40m²\nKit & foco");
        assert_eq!(
            link,
            "https://wa.me/5511912345678?text=Espa%C3%A7o%3A%2025%E2%80%9340m%C2%B2%0AKit%20%26%20foco"
        );
    }

    #[test]
    fn email_body_prefixes_only_given_fields() {
        let only_name = ContactDetails {
            name: " Ana ".into(),
            ..Default::default()
        };
        assert_eq!(email_body(&only_name, "msg"), "Nome: Ana\n\nmsg");

        let both = ContactDetails {
            name: "Ana".into(),
            email: "ana@example.com".into(),
        };
        assert_eq!(
            email_body(&both, "msg"),
            "Nome: Ana\nE-mail: ana@example.com\n\nmsg"
        );

        assert_eq!(email_body(&ContactDetails::default(), "msg"), "msg");
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let link = mailto_link(&config(), "a b\nc");
        assert_eq!(
            link,
            "mailto:vendas@example.com?subject=Or%C3%A7amento&body=a%20b%0Ac"
        );
    }
}
