use crate::client::RegistrationApi;
use crate::error::{IdeatexError, IdeatexResult};
use crate::logging::log_debug;
use crate::models::{Leader, Member, Team};

/// Fetch membership and enrich every member's profile concurrently.
///
/// Returns `Ok(None)` when the backend reports no members for the team.
/// A failed profile fetch degrades that member to placeholder fields; it
/// never aborts the rest of the roster.
pub async fn fetch_team<C>(api: &C, team_id: &str) -> IdeatexResult<Option<Team>>
where
    C: RegistrationApi + Clone + 'static,
{
    let records = api.team_members(team_id).await?;
    if records.is_empty() {
        return Ok(None);
    }

    let leader_record = records
        .iter()
        .find(|r| r.is_leader())
        .unwrap_or(&records[0])
        .clone();

    // Fan out one profile fetch per member, then join in member order.
    let handles: Vec<_> = records
        .iter()
        .cloned()
        .map(|record| {
            let api = api.clone();
            tokio::spawn(async move {
                match api.user_profile(&record.user_id).await {
                    Ok(profile) => Member::from_profile(&record, &profile),
                    Err(e) => {
                        log_debug(&format!(
                            "Profile fetch failed for member {}: {}",
                            record.id, e
                        ));
                        Member::placeholder(&record)
                    }
                }
            })
        })
        .collect();

    let mut members = Vec::with_capacity(handles.len());
    for handle in handles {
        let member = handle
            .await
            .map_err(|e| IdeatexError::Unknown(format!("Enrichment task failed: {}", e)))?;
        members.push(member);
    }

    let leader_details = members
        .iter()
        .find(|m| m.role == "LEADER")
        .unwrap_or(&members[0]);

    let leader = Leader {
        name: leader_details.name.clone(),
        year: leader_details.year.clone(),
        library_id: leader_details.library_id.clone(),
        gender: leader_details.gender.clone(),
    };

    Ok(Some(Team {
        id: leader_record.team_id.clone().unwrap_or_default(),
        name: leader_record.team_name.clone().unwrap_or_default(),
        code: leader_record.team_code.clone().unwrap_or_default(),
        leader,
        members,
        is_pending_payment: leader_record.is_pending_payment,
    }))
}
