//! Contact notification email template.

use folio_types::contact::ContactMessage;
use folio_types::email::OutboundEmail;

use crate::html::escape;

/// Sender and recipient of contact notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRoute {
    /// Verified sender address, e.g. `no-reply@example.dev`.
    pub from: String,
    /// Site owner's inbox.
    pub to: String,
}

/// Build the notification email for a freshly stored contact message.
pub fn contact_notification(route: &NotificationRoute, msg: &ContactMessage) -> OutboundEmail {
    let html = format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <blockquote>{message}</blockquote>\n",
        name = escape(&msg.name),
        email = escape(&msg.email),
        message = escape(&msg.message),
    );

    OutboundEmail {
        from: route.from.clone(),
        to: route.to.clone(),
        subject: format!("📩 New Contact Form Submission from {}", msg.name),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> NotificationRoute {
        NotificationRoute {
            from: "no-reply@folio.dev".to_string(),
            to: "owner@folio.dev".to_string(),
        }
    }

    #[test]
    fn test_notification_fields() {
        let msg = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let email = contact_notification(&route(), &msg);

        assert_eq!(email.from, "no-reply@folio.dev");
        assert_eq!(email.to, "owner@folio.dev");
        assert_eq!(email.subject, "📩 New Contact Form Submission from Ada");
        assert!(email.html.contains("<h2>New Contact Form Submission</h2>"));
        assert!(email.html.contains("<p><strong>Name:</strong> Ada</p>"));
        assert!(email.html.contains("<p><strong>Email:</strong> ada@example.com</p>"));
        assert!(email.html.contains("<blockquote>Hello</blockquote>"));
    }

    #[test]
    fn test_notification_escapes_message_body() {
        let msg = ContactMessage {
            name: "Eve".to_string(),
            email: "eve@example.com".to_string(),
            message: "<img src=x onerror=alert(1)>".to_string(),
        };
        let email = contact_notification(&route(), &msg);
        assert!(!email.html.contains("<img"));
        assert!(email.html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
