//! Built-in dialogs served by `FixtureDialogs`

use crate::template::ClientRecord;

use super::types::{Dialog, Message, Sender};

fn client(name: &str, email: &str, phone: &str, status: &str, registered: &str) -> ClientRecord {
    ClientRecord {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        status: Some(status.to_string()),
        registration_date: Some(registered.to_string()),
    }
}

pub(super) fn fixture_dialogs() -> Vec<Dialog> {
    use Sender::{Ai, Client, Operator};

    vec![
        Dialog {
            id: 1,
            name: "Ivan Petrov".to_string(),
            avatar: "/avatars/ivan.jpg".to_string(),
            client: client(
                "Ivan Petrov",
                "ivan@example.com",
                "+7 (999) 123-45-67",
                "Active client",
                "01.01.2024",
            ),
            messages: vec![
                Message::new(1, Client, "Hello! I have a problem with a payment.", "10:00"),
                Message::new(2, Operator, "Good afternoon! I will help you sort this out.", "10:01"),
                Message::new(
                    3,
                    Ai,
                    "Hint: check the internet connection and try clearing the browser cache.",
                    "10:01",
                ),
                Message::new(4, Client, "The payment page says \"Connection error\"", "10:02"),
                Message::new(
                    5,
                    Operator,
                    "Let's check a few things. Which browser are you using?",
                    "10:03",
                ),
                Message::new(6, Client, "Google Chrome", "10:03"),
                Message::new(
                    7,
                    Ai,
                    "Clearing cache and cookies often helps in Chrome. Walk the client through it.",
                    "10:04",
                ),
                Message::new(
                    8,
                    Operator,
                    "Good idea! Let's clear the cache. Press Ctrl+Shift+Delete, choose \"All time\" and tick \"Cookies\" and \"Cache\".",
                    "10:04",
                ),
                Message::new(9, Client, "OK, done as you said", "10:06"),
                Message::new(10, Operator, "Now please try the payment again", "10:06"),
                Message::new(11, Client, "Yes, everything works now! Thank you so much!", "10:08"),
                Message::new(
                    12,
                    Operator,
                    "Glad I could help! Contact us again if anything comes up.",
                    "10:08",
                ),
                Message::new(
                    13,
                    Ai,
                    "Nicely solved! Saving this scenario for future requests.",
                    "10:09",
                ),
            ],
        },
        Dialog {
            id: 2,
            name: "Maria Sidorova".to_string(),
            avatar: "/avatars/maria.jpg".to_string(),
            client: client(
                "Maria Sidorova",
                "maria@example.com",
                "+7 (999) 765-43-21",
                "New client",
                "15.03.2024",
            ),
            messages: vec![
                Message::new(1, Client, "Good afternoon! I can't log in to my account", "09:30"),
                Message::new(2, Operator, "Hello! I'll help you with that right away", "09:31"),
                Message::new(3, Ai, "This may be a browser cache issue", "09:31"),
            ],
        },
        Dialog {
            id: 3,
            name: "Alexey Ivanov".to_string(),
            avatar: "/avatars/alexey.jpg".to_string(),
            client: client(
                "Alexey Ivanov",
                "alexey@example.com",
                "+7 (999) 555-55-55",
                "VIP client",
                "10.06.2023",
            ),
            messages: vec![
                Message::new(1, Client, "When will the new version be available?", "11:20"),
                Message::new(2, Operator, "The update is planned for next week", "11:22"),
            ],
        },
    ]
}
