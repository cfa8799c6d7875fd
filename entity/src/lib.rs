pub mod invitation;
pub mod manuscript;
pub mod membership;
pub mod task;
pub mod team;
pub mod user;

/*
 A team is an agency; users join it through invitations only.
 Invitations carry the membership role (admin or member, never owner)
 and die either by acceptance (accepted_at set once) or expiry.
 Users authenticate with a display name + 4-digit PIN; bearer access
 tokens are issued on join and on PIN login.
 Tasks and manuscripts are plain team-scoped records; a manuscript's
 pipeline stage is derived from its text, not stored.
 */
