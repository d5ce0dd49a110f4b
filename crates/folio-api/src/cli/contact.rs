//! `folio contact`: run the contact form controller from the terminal.

use anyhow::Result;
use console::style;

use folio_core::contact::{BackendChannel, ContactForm, FormController};
use folio_infra::config::FolioConfig;
use folio_infra::endpoint::ContactEndpointChannel;
use folio_infra::supabase::SupabaseClient;
use folio_types::contact::{StatusMessage, StatusTone};

/// Submit `form` through the endpoint, falling back to a direct write with
/// the public backend credential.
pub async fn submit_form(
    config: FolioConfig,
    endpoint: Option<String>,
    form: &mut ContactForm,
) -> Result<StatusMessage> {
    let url = endpoint.unwrap_or(config.site.contact_endpoint);
    let primary = ContactEndpointChannel::new(url)?;
    let fallback = config
        .public_backend
        .map(SupabaseClient::new)
        .transpose()?
        .map(BackendChannel::new);

    let controller = FormController::new(primary, fallback);
    Ok(controller.submit(form).await)
}

pub async fn send_contact(
    config: FolioConfig,
    mut form: ContactForm,
    endpoint: Option<String>,
    json: bool,
) -> Result<()> {
    let status = submit_form(config, endpoint, &mut form).await?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "text": status.text,
                "tone": status.tone,
                "class": status.css_class(),
            })
        );
    } else {
        println!("  {}", styled(&status));
    }

    ensure_recorded(&status)
}

/// Non-zero exit for scripts when the message was not recorded.
fn ensure_recorded(status: &StatusMessage) -> Result<()> {
    match status.tone {
        StatusTone::Success => Ok(()),
        StatusTone::Warning => anyhow::bail!("contact message not sent: all fields are required"),
        StatusTone::Failure => anyhow::bail!("contact message could not be delivered"),
    }
}

fn styled(status: &StatusMessage) -> console::StyledObject<&str> {
    let text = style(status.text.as_str());
    match status.tone {
        StatusTone::Warning => text.yellow(),
        StatusTone::Success => text.green(),
        StatusTone::Failure => text.red(),
    }
}

#[cfg(test)]
mod tests {
    use folio_core::contact::form::{MSG_FAILED, MSG_FIELDS_REQUIRED, MSG_RECORDED, MSG_SENT};
    use folio_types::config::SiteConfig;

    use super::*;

    fn config_without_backend() -> FolioConfig {
        FolioConfig::from_lookup(SiteConfig::default(), |_| None)
    }

    async fn unreachable_endpoint() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/api/contact")
    }

    #[tokio::test]
    async fn test_blank_form_is_rejected_before_any_request() {
        let mut form = ContactForm::new("  ", "ada@example.com", "Hello");
        let status = submit_form(
            config_without_backend(),
            Some("http://127.0.0.1:9/api/contact".to_string()),
            &mut form,
        )
        .await
        .unwrap();

        assert_eq!(status, StatusMessage::warning(MSG_FIELDS_REQUIRED));
        assert_eq!(form.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_without_fallback_keeps_values() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hello");
        let status = submit_form(
            config_without_backend(),
            Some(unreachable_endpoint().await),
            &mut form,
        )
        .await
        .unwrap();

        assert_eq!(status, StatusMessage::failure(MSG_FAILED));
        assert_eq!(form, ContactForm::new("Ada", "ada@example.com", "Hello"));
    }

    #[test]
    fn test_only_recorded_messages_exit_cleanly() {
        assert!(ensure_recorded(&StatusMessage::success(MSG_SENT)).is_ok());
        assert!(ensure_recorded(&StatusMessage::success(MSG_RECORDED)).is_ok());
        assert!(ensure_recorded(&StatusMessage::warning(MSG_FIELDS_REQUIRED)).is_err());

        let err = ensure_recorded(&StatusMessage::failure(MSG_FAILED)).unwrap_err();
        assert!(err.to_string().contains("could not be delivered"));
    }

    #[tokio::test]
    async fn test_failed_delivery_is_an_error() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hello");
        let result = send_contact(
            config_without_backend(),
            form,
            Some(unreachable_endpoint().await),
            true,
        )
        .await;
        assert!(result.is_err());
    }
}
