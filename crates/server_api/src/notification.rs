use email_relay::OutboundEmail;
use shared::domain::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRoute {
    pub sender: String,
    pub operator: String,
}

impl Default for NotificationRoute {
    fn default() -> Self {
        Self {
            sender: "contact@agentex.com".into(),
            operator: "nichedotsol@gmail.com".into(),
        }
    }
}

pub fn subject_for(message: &ContactMessage) -> String {
    format!("New Domain Inquiry from {}", message.name())
}

pub fn render_body(message: &ContactMessage) -> String {
    format!(
        "New inquiry from AgentEX landing page:\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         \n\
         Message:\n\
         {body}\n\
         \n\
         ---\n\
         This message was sent from the AgentEX domain inquiry form.",
        name = message.name(),
        email = message.email(),
        body = message.message(),
    )
}

pub fn compose(route: &NotificationRoute, message: &ContactMessage) -> OutboundEmail {
    OutboundEmail {
        from: route.sender.clone(),
        to: route.operator.clone(),
        subject: subject_for(message),
        text: render_body(message),
        reply_to: message.email().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_email_replies_to_sender() {
        let message = ContactMessage::new("Ada", "ada@example.com", "Is it still for sale?")
            .expect("valid");
        let email = compose(&NotificationRoute::default(), &message);

        assert_eq!(email.subject, "New Domain Inquiry from Ada");
        assert_eq!(email.reply_to, "ada@example.com");
        assert_eq!(email.to, "nichedotsol@gmail.com");
        assert_eq!(
            email.text,
            "New inquiry from AgentEX landing page:\n\nName: Ada\nEmail: ada@example.com\n\n\
             Message:\nIs it still for sale?\n\n---\n\
             This message was sent from the AgentEX domain inquiry form."
        );
    }
}
