//! Notification record and query types.
//!
//! Payload bodies (comments, workouts, reports, user profiles) belong to
//! other subsystems; they pass through here as opaque JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Closed enumeration of notification event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    AccountCreation,
    CommentLike,
    CommentReply,
    CommentSuspension,
    CommentUnsuspension,
    Follow,
    FollowRequest,
    Mention,
    Report,
    SuspensionAppeal,
    UserWarning,
    UserWarningAppeal,
    UserWarningLifting,
    WorkoutComment,
    WorkoutLike,
    WorkoutSuspension,
    WorkoutUnsuspension,
}

/// The payload field a given event kind populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadField {
    Comment,
    Workout,
    Report,
    ReportAction,
    From,
}

impl NotificationType {
    /// Which payload field this kind carries.
    pub fn payload_field(self) -> PayloadField {
        use NotificationType::*;
        match self {
            AccountCreation | Follow | FollowRequest => PayloadField::From,
            CommentLike | CommentReply | CommentSuspension | CommentUnsuspension | Mention
            | WorkoutComment => PayloadField::Comment,
            WorkoutLike | WorkoutSuspension | WorkoutUnsuspension => PayloadField::Workout,
            Report | SuspensionAppeal | UserWarningAppeal => PayloadField::Report,
            UserWarning | UserWarningLifting => PayloadField::ReportAction,
        }
    }
}

/// Violations of the one-payload-per-record contract.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification {id} of type {kind:?} is missing its payload")]
    MissingPayload { id: i64, kind: NotificationType },

    #[error("notification {id} of type {kind:?} carries {found:?}, expected {expected:?}")]
    WrongPayload {
        id: i64,
        kind: NotificationType,
        expected: PayloadField,
        found: PayloadField,
    },

    #[error("notification {id} of type {kind:?} carries {count} payload fields, expected exactly one")]
    AmbiguousPayload {
        id: i64,
        kind: NotificationType,
        count: usize,
    },
}

/// One notification as received on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: NotificationType,

    pub created_at: String,

    pub marked_as_read: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_action: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
}

impl NotificationRecord {
    fn populated(&self) -> Vec<PayloadField> {
        let mut fields = Vec::new();
        if self.comment.is_some() {
            fields.push(PayloadField::Comment);
        }
        if self.workout.is_some() {
            fields.push(PayloadField::Workout);
        }
        if self.report.is_some() {
            fields.push(PayloadField::Report);
        }
        if self.report_action.is_some() {
            fields.push(PayloadField::ReportAction);
        }
        if self.from.is_some() {
            fields.push(PayloadField::From);
        }
        fields
    }

    /// Check the exactly-one-payload invariant: the record carries one
    /// populated payload field and it is the one its type calls for.
    pub fn validate(&self) -> Result<(), NotificationError> {
        let populated = self.populated();
        let expected = self.kind.payload_field();

        match populated.as_slice() {
            [single] if *single == expected => Ok(()),
            [] => Err(NotificationError::MissingPayload {
                id: self.id,
                kind: self.kind,
            }),
            [other] => Err(NotificationError::WrongPayload {
                id: self.id,
                kind: self.kind,
                expected,
                found: *other,
            }),
            many => Err(NotificationError::AmbiguousPayload {
                id: self.id,
                kind: self.kind,
                count: many.len(),
            }),
        }
    }
}

/// Query parameters for listing notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_status: Option<bool>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationType>,
}

/// A read-status update for one notification, alongside the query that
/// produced the list being refreshed. Unlike the wire records above,
/// this payload uses camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStatusUpdate {
    pub notification_id: i64,
    pub marked_as_read: bool,
    pub current_query: NotificationsQuery,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserializes_from_wire_shape() {
        let record: NotificationRecord = serde_json::from_value(json!({
            "id": 12,
            "type": "workout_like",
            "created_at": "Mon, 01 Jul 2024 09:00:00 GMT",
            "marked_as_read": false,
            "workout": { "id": "abc123" }
        }))
        .unwrap();

        assert_eq!(record.kind, NotificationType::WorkoutLike);
        assert!(!record.marked_as_read);
        record.validate().unwrap();
    }

    #[test]
    fn test_type_serializes_snake_case() {
        let value = serde_json::to_value(NotificationType::FollowRequest).unwrap();
        assert_eq!(value, json!("follow_request"));
    }

    #[test]
    fn test_missing_payload_rejected() {
        let record: NotificationRecord = serde_json::from_value(json!({
            "id": 3,
            "type": "follow",
            "created_at": "Mon, 01 Jul 2024 09:00:00 GMT",
            "marked_as_read": true
        }))
        .unwrap();

        assert!(matches!(
            record.validate(),
            Err(NotificationError::MissingPayload { id: 3, .. })
        ));
    }

    #[test]
    fn test_wrong_payload_field_rejected() {
        let record: NotificationRecord = serde_json::from_value(json!({
            "id": 4,
            "type": "follow",
            "created_at": "Mon, 01 Jul 2024 09:00:00 GMT",
            "marked_as_read": false,
            "workout": {}
        }))
        .unwrap();

        assert!(matches!(
            record.validate(),
            Err(NotificationError::WrongPayload {
                expected: PayloadField::From,
                found: PayloadField::Workout,
                ..
            })
        ));
    }

    #[test]
    fn test_multiple_payloads_rejected() {
        let record: NotificationRecord = serde_json::from_value(json!({
            "id": 5,
            "type": "mention",
            "created_at": "Mon, 01 Jul 2024 09:00:00 GMT",
            "marked_as_read": false,
            "comment": {},
            "workout": {}
        }))
        .unwrap();

        assert!(matches!(
            record.validate(),
            Err(NotificationError::AmbiguousPayload { count: 2, .. })
        ));
    }

    #[test]
    fn test_query_omits_unset_fields() {
        let query = NotificationsQuery {
            page: Some(2),
            kind: Some(NotificationType::Mention),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({ "page": 2, "type": "mention" }));
    }

    #[test]
    fn test_status_update_round_trip() {
        let update = NotificationStatusUpdate {
            notification_id: 7,
            marked_as_read: true,
            current_query: NotificationsQuery {
                read_status: Some(false),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            json!({
                "notificationId": 7,
                "markedAsRead": true,
                "currentQuery": { "read_status": false }
            })
        );

        let back: NotificationStatusUpdate = serde_json::from_value(value).unwrap();
        assert_eq!(back.notification_id, 7);
        assert_eq!(back.current_query, update.current_query);
    }
}
