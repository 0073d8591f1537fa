//! Message sequence to render-unit transformation.
//!
//! The conversation view draws a flat list of units: a one-time
//! conversation-start notice, then per message an optional date divider
//! followed by the message tile. Units are rebuilt from the message slice on
//! every frame and never cached.

use chrono::NaiveDate;

use crate::format::{self, MessageFormatter};
use crate::message::Message;

/// One visual element of the conversation view.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderUnit<'a> {
    ConversationStart,
    DateDivider {
        /// Id of the message the divider introduces.
        message_id: &'a str,
        date: Option<NaiveDate>,
    },
    Tile {
        message: &'a Message,
        is_sender: bool,
    },
}

/// Ordered render units for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderList<'a> {
    pub units: Vec<RenderUnit<'a>>,
}

impl<'a> RenderList<'a> {
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderUnit<'a>> {
        self.units.iter()
    }

    pub fn tiles(&self) -> impl Iterator<Item = (&'a Message, bool)> + '_ {
        self.units.iter().filter_map(|unit| match unit {
            RenderUnit::Tile { message, is_sender } => Some((*message, *is_sender)),
            _ => None,
        })
    }

    pub fn divider_count(&self) -> usize {
        self.units
            .iter()
            .filter(|unit| matches!(unit, RenderUnit::DateDivider { .. }))
            .count()
    }
}

/// Whether `message` was sent by the current user.
pub fn is_sender(message: &Message, current_user: Option<&str>) -> bool {
    current_user.is_some_and(|me| message.sender_address == me)
}

/// Two optional days match only when both are known and equal.
pub fn same_day(a: Option<NaiveDate>, b: Option<NaiveDate>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// Fold state: the day of the previous message (outer `None` before the
/// first message) and the units emitted so far.
struct Fold<'a> {
    previous: Option<Option<NaiveDate>>,
    units: Vec<RenderUnit<'a>>,
}

/// Build the render list for `messages` in order.
pub fn build_render_list<'a>(
    messages: &'a [Message],
    current_user: Option<&str>,
    formatter: &dyn MessageFormatter,
) -> RenderList<'a> {
    if messages.is_empty() {
        return RenderList::default();
    }

    let mut start = Vec::with_capacity(messages.len() * 2 + 1);
    start.push(RenderUnit::ConversationStart);

    let folded = messages.iter().fold(
        Fold { previous: None, units: start },
        |mut acc, message| {
            let day = message.sent.as_ref().map(|sent| formatter.calendar_day(sent));
            if let Some(prev_day) = acc.previous {
                if !same_day(prev_day, day) {
                    acc.units.push(RenderUnit::DateDivider {
                        message_id: &message.id,
                        date: day,
                    });
                }
            }
            acc.units.push(RenderUnit::Tile {
                message,
                is_sender: is_sender(message, current_user),
            });
            acc.previous = Some(day);
            acc
        },
    );

    RenderList { units: folded.units }
}

/// Text shown in a message tile body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileText {
    Content(String),
    Error(String),
}

impl TileText {
    pub fn for_message(message: &Message, formatter: &dyn MessageFormatter) -> Self {
        match &message.error {
            Some(err) => TileText::Error(format!("Error: {}", err.message)),
            None => TileText::Content(formatter.render_emoji(message.content_or_empty())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TileText::Content(text) | TileText::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TileText::Error(_))
    }
}

/// Header time label for a tile.
pub fn tile_time(message: &Message, formatter: &dyn MessageFormatter) -> String {
    format::time_label(formatter, message.sent.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ZonedFormatter;
    use chrono::{TimeZone, Utc};

    fn msg(id: &str, sender: &str, day: u32, hour: u32, content: &str) -> Message {
        Message::new(id, sender)
            .with_sent(Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap())
            .with_content(content)
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let f = ZonedFormatter::utc();
        let list = build_render_list(&[], Some("0xA"), &f);
        assert!(list.is_empty());
    }

    #[test]
    fn test_same_day_no_dividers() {
        let f = ZonedFormatter::utc();
        let messages = vec![msg("1", "0xA", 1, 10, "hi"), msg("2", "0xA", 1, 11, "yo")];
        let list = build_render_list(&messages, Some("0xA"), &f);

        assert_eq!(list.units[0], RenderUnit::ConversationStart);
        assert_eq!(list.divider_count(), 0);
        let tiles: Vec<_> = list.tiles().collect();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|(_, is_sender)| *is_sender));
        assert_eq!(tiles[0].0.content_or_empty(), "hi");
        assert_eq!(tiles[1].0.content_or_empty(), "yo");
    }

    #[test]
    fn test_day_change_inserts_divider_before_tile() {
        let f = ZonedFormatter::utc();
        let messages = vec![msg("1", "0xA", 1, 10, "hi"), msg("2", "0xA", 2, 10, "yo")];
        let list = build_render_list(&messages, Some("0xA"), &f);

        assert_eq!(list.units.len(), 4);
        assert_eq!(
            list.units[2],
            RenderUnit::DateDivider {
                message_id: "2",
                date: NaiveDate::from_ymd_opt(2024, 1, 2),
            }
        );
        assert!(matches!(list.units[3], RenderUnit::Tile { message, .. } if message.id == "2"));
        assert_eq!(
            format::date_label(&f, NaiveDate::from_ymd_opt(2024, 1, 2)),
            "January 2, 2024"
        );
    }

    #[test]
    fn test_missing_timestamp_always_changes_day() {
        let f = ZonedFormatter::utc();
        let messages = vec![
            msg("1", "0xA", 1, 10, "a"),
            Message::new("2", "0xA").with_content("b"),
            Message::new("3", "0xA").with_content("c"),
            msg("4", "0xA", 1, 12, "d"),
        ];
        let list = build_render_list(&messages, None, &f);

        assert_eq!(list.divider_count(), 3);
        assert_eq!(
            list.units[2],
            RenderUnit::DateDivider { message_id: "2", date: None }
        );
    }

    #[test]
    fn test_exactly_one_notice_first() {
        let f = ZonedFormatter::utc();
        let messages: Vec<_> = (1..=5).map(|d| msg(&d.to_string(), "0xB", d, 9, "x")).collect();
        let list = build_render_list(&messages, Some("0xA"), &f);
        let notices = list
            .iter()
            .filter(|u| matches!(u, RenderUnit::ConversationStart))
            .count();
        assert_eq!(notices, 1);
        assert_eq!(list.units[0], RenderUnit::ConversationStart);
        assert_eq!(list.divider_count(), 4);
    }

    #[test]
    fn test_is_sender_exact_match() {
        let m = Message::new("1", "0xAbC");
        assert!(is_sender(&m, Some("0xAbC")));
        assert!(!is_sender(&m, Some("0xabc")));
        assert!(!is_sender(&m, None));
        assert!(!is_sender(&Message::new("2", ""), None));
    }

    #[test]
    fn test_same_day_absent_never_matches() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(same_day(d, d));
        assert!(!same_day(d, None));
        assert!(!same_day(None, d));
        assert!(!same_day(None, None));
    }

    #[test]
    fn test_tile_text_error_wins() {
        let f = ZonedFormatter::utc();
        let m = Message::new("1", "0xA").with_content("secret").with_error("decrypt failed");
        let text = TileText::for_message(&m, &f);
        assert_eq!(text.as_str(), "Error: decrypt failed");
        assert!(text.is_error());
    }

    #[test]
    fn test_tile_text_content_and_empty() {
        let f = ZonedFormatter::utc();
        let m = Message::new("1", "0xA").with_content("gm :wave:");
        assert_eq!(TileText::for_message(&m, &f), TileText::Content("gm 👋".into()));
        let empty = Message::new("2", "0xA");
        assert_eq!(TileText::for_message(&empty, &f).as_str(), "");
    }

    #[test]
    fn test_rebuild_is_identical() {
        let f = ZonedFormatter::utc();
        let messages = vec![
            msg("1", "0xA", 1, 10, "hi"),
            Message::new("2", "0xB").with_error("nope"),
            msg("3", "0xB", 3, 8, "later"),
        ];
        let first = build_render_list(&messages, Some("0xA"), &f);
        let second = build_render_list(&messages, Some("0xA"), &f);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tile_time() {
        let f = ZonedFormatter::utc();
        assert_eq!(tile_time(&msg("1", "0xA", 1, 14, ""), &f), "2:00 PM");
        assert_eq!(tile_time(&Message::new("2", "0xA"), &f), "");
    }
}
