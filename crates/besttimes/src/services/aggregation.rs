use futures::future::join_all;
use tracing::warn;

use crate::models::best_time::MemberBestTimeStore;
use crate::models::member::Member;
use crate::repository::RecordRepository;
use crate::services::reduction;

/// Loads best times for a whole roster, one concurrent fetch per member.
///
/// Fan-out is unbounded; rosters are tens of members and the only
/// suspension point is the repository call. A member whose fetch fails
/// is logged and degrades to an empty entry list instead of aborting the
/// aggregation. The roster itself is supplied by the caller, so this
/// function has no failure path of its own.
///
/// Each per-member pipeline returns a pure `(member_id, entries)` pair;
/// the store is assembled in a single step after every pipeline has
/// settled, so no shared state is mutated during concurrent execution.
pub async fn load_all(repo: &dyn RecordRepository, members: &[Member]) -> MemberBestTimeStore {
    let pipelines = members.iter().map(|member| async move {
        match repo.fetch_records_for_member(member.user_id).await {
            Ok(records) => (member.member_id, reduction::best_times(&records)),
            Err(err) => {
                warn!(
                    member_id = %member.member_id,
                    error = %err,
                    "failed to load records for member, keeping empty best times"
                );
                (member.member_id, Vec::new())
            }
        }
    });

    join_all(pipelines).await.into_iter().collect()
}
