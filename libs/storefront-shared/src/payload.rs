use std::fmt;

/// Admin controls attached to notifications as inline callback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    ApproveReceipt(String),
    RejectReceipt(String),
    ViewOrder(String),
    ApproveOrder(String),
}

impl AdminAction {
    pub fn to_payload_string(&self) -> String {
        self.to_string()
    }

    pub fn parse(data: &str) -> Option<Self> {
        let (kind, id) = data.split_once(':')?;
        if id.is_empty() {
            return None;
        }
        let id = id.to_string();
        match kind {
            "approve_receipt" => Some(AdminAction::ApproveReceipt(id)),
            "reject_receipt" => Some(AdminAction::RejectReceipt(id)),
            "view_order" => Some(AdminAction::ViewOrder(id)),
            "approve_order" => Some(AdminAction::ApproveOrder(id)),
            _ => None,
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminAction::ApproveReceipt(id) => write!(f, "approve_receipt:{}", id),
            AdminAction::RejectReceipt(id) => write!(f, "reject_receipt:{}", id),
            AdminAction::ViewOrder(id) => write!(f, "view_order:{}", id),
            AdminAction::ApproveOrder(id) => write!(f, "approve_order:{}", id),
        }
    }
}
