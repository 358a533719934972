use std::sync::Arc;

/// Static allowlist of privileged users.
#[derive(Debug, Clone)]
pub struct AdminService {
    admin_ids: Arc<Vec<i64>>,
    support_id: Option<i64>,
}

impl AdminService {
    /// The support recipient is always an admin.
    pub fn new(mut admin_ids: Vec<i64>, support_id: Option<i64>) -> Self {
        if let Some(support) = support_id {
            if !admin_ids.contains(&support) {
                admin_ids.push(support);
            }
        }
        Self {
            admin_ids: Arc::new(admin_ids),
            support_id,
        }
    }

    pub fn is_admin(&self, tg_id: i64) -> bool {
        self.admin_ids.contains(&tg_id)
    }

    pub fn admins(&self) -> &[i64] {
        &self.admin_ids
    }

    /// Support recipient first, then every other admin, each exactly once.
    pub fn support_recipients(&self) -> Vec<i64> {
        let mut out: Vec<i64> = self.support_id.into_iter().collect();
        out.extend(
            self.admin_ids
                .iter()
                .copied()
                .filter(|id| Some(*id) != self.support_id),
        );
        out
    }
}
