use anyhow::{Error, Result, anyhow};
use serde::Serialize;

use crate::models::content::NotificationContent;

pub const CARD_ID: &str = "createCardMessage";
pub const WIDGET_REF_ICON_URL: &str = "https://fonts.gstatic.com/s/i/short-term/release/googlesymbols/quick_reference/default/48px.svg";

/// Request body accepted by a Google Chat incoming webhook.
#[derive(Debug, Clone, Serialize)]
pub struct CardPayload {
    #[serde(rename = "cardsV2")]
    pub cards_v2: CardWithId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardWithId {
    pub card_id: String,
    pub card: Card,
}

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub header: CardHeader,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHeader {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub collapsible: bool,
    pub uncollapsible_widgets_count: u32,
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    DecoratedText(DecoratedText),
    ButtonList(ButtonList),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedText {
    pub start_icon: Icon,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Icon {
    IconUrl(String),
    KnownIcon(KnownIcon),
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnownIcon {
    Person,
    Clock,
}

#[derive(Debug, Clone, Serialize)]
pub struct ButtonList {
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub text: String,
    pub on_click: OnClick,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnClick {
    pub open_link: OpenLink,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenLink {
    pub url: String,
}

impl DecoratedText {
    fn widget(start_icon: Icon, text: String) -> Widget {
        Widget::DecoratedText(Self { start_icon, text })
    }
}

impl From<&NotificationContent> for CardPayload {
    fn from(content: &NotificationContent) -> Self {
        let ref_icon = || Icon::IconUrl(WIDGET_REF_ICON_URL.to_string());

        let widgets = vec![
            DecoratedText::widget(ref_icon(), format!("<b>Repo: </b> {}", content.repo)),
            DecoratedText::widget(ref_icon(), format!("<b>Ref: </b> {}", content.git_ref)),
            DecoratedText::widget(
                Icon::KnownIcon(KnownIcon::Person),
                format!("<b>Actor: </b> {}", content.triggering_actor),
            ),
            DecoratedText::widget(
                Icon::KnownIcon(KnownIcon::Clock),
                format!("<b>UTC: </b> {}", content.timestamp),
            ),
            Widget::ButtonList(ButtonList {
                buttons: vec![Button {
                    text: format!("Open {}", content.event_kind),
                    on_click: OnClick {
                        open_link: OpenLink {
                            url: content.click_url.clone(),
                        },
                    },
                }],
            }),
        ];

        Self {
            cards_v2: CardWithId {
                card_id: CARD_ID.to_string(),
                card: Card {
                    header: CardHeader {
                        title: content.title.clone(),
                        subtitle: content.subtitle.clone(),
                        image_url: content.header_icon_url.clone(),
                    },
                    sections: vec![Section {
                        collapsible: true,
                        uncollapsible_widgets_count: 1,
                        widgets,
                    }],
                },
            },
        }
    }
}

impl CardPayload {
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|e| anyhow!("Failed to serialize card payload: {}", e))
    }
}

/// Renders `content` into the webhook request body.
pub fn serialize(content: &NotificationContent) -> Result<Vec<u8>, Error> {
    CardPayload::from(content).to_bytes()
}
