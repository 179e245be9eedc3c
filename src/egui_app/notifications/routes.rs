//! Route / category mapping
//!
//! The single place that knows which notification categories a view
//! covers, and which view a notification of a given category leads to.

use crate::egui_app::types::AppView;
use crate::shared::model::NotificationCategory;

/// Categories considered read once the user is looking at `view`
pub fn categories_cleared_by(view: AppView) -> &'static [NotificationCategory] {
    use NotificationCategory::*;
    match view {
        AppView::Messaging => &[Message],
        AppView::Payments => &[Payment],
        AppView::Subjects | AppView::Careers | AppView::SubjectRoster => &[Grade, Assignment],
        AppView::Auth | AppView::Landing | AppView::Users => &[],
    }
}

/// The view a clicked notification navigates to
pub fn target_view(category: NotificationCategory) -> AppView {
    match category {
        NotificationCategory::Message => AppView::Messaging,
        NotificationCategory::Grade => AppView::Subjects,
        NotificationCategory::Assignment => AppView::SubjectRoster,
        NotificationCategory::Payment => AppView::Payments,
    }
}
