use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::UserProfile;
use crate::planner::constants::DRAFT_KEY;
use crate::state::store::KeyValueStore;

/// A saved, unsubmitted snapshot of wizard answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub profile: UserProfile,
    pub timestamp: DateTime<Utc>,
}

/// Save the profile as the single draft record, replacing any previous one.
pub fn save_draft<S: KeyValueStore + ?Sized>(
    store: &mut S,
    profile: &UserProfile,
) -> Result<Draft> {
    let draft = Draft {
        profile: profile.clone(),
        timestamp: Utc::now(),
    };
    let json = serde_json::to_string(&draft)?;
    store.set(DRAFT_KEY, json)?;
    info!(at = %draft.timestamp, "draft saved");
    Ok(draft)
}

/// Load the draft record if there is one.
pub fn load_draft<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Draft>> {
    let Some(json) = store.get(DRAFT_KEY)? else {
        debug!("no saved draft");
        return Ok(None);
    };
    let draft: Draft = serde_json::from_str(&json)?;
    debug!(at = %draft.timestamp, "draft found");
    Ok(Some(draft))
}

pub fn clear_draft<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<()> {
    store.remove(DRAFT_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::state::store::MemoryStore;

    #[test]
    fn test_load_without_draft() {
        let store = MemoryStore::new();
        assert!(load_draft(&store).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_draft_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(DRAFT_KEY, "not json".to_string()).unwrap();
        assert!(matches!(load_draft(&store), Err(PlannerError::Json(_))));
    }

    #[test]
    fn test_clear_draft() {
        let mut store = MemoryStore::new();
        save_draft(&mut store, &UserProfile::default()).unwrap();
        clear_draft(&mut store).unwrap();
        assert!(load_draft(&store).unwrap().is_none());
    }
}
