//! End-to-end flow over the portal reducers: seeded board, progress
//! update, announcement post, and a full student session.

use peerboard::mvi::Reducer;
use peerboard::portal::announcements::{
    AnnouncementBoardState, AnnouncementIntent, AnnouncementsReducer,
};
use peerboard::portal::projects::{Project, ProjectBoardState, ProjectIntent, ProjectsReducer};
use peerboard::portal::session::{Role, SessionIntent, SessionReducer, SessionState};

fn seeded_board() -> ProjectBoardState {
    let mut first = Project::new(1, "AI Chatbot");
    first.progress = 50;
    let mut second = Project::new(2, "Portfolio Website");
    second.progress = 70;
    ProjectBoardState::seeded(vec![first, second])
}

#[test]
fn progress_update_touches_exactly_one_project() {
    let before = seeded_board();
    let after = ProjectsReducer::reduce(before.clone(), ProjectIntent::SetProgress { id: 1, value: 80 });

    assert_eq!(after.get(1).unwrap().progress, 80);
    assert_eq!(after.get(2), before.get(2));
}

#[test]
fn announcement_post_grows_log_by_exactly_one_in_order() {
    let mut board = AnnouncementBoardState::seeded(vec![
        "Welcome to Peer Review Week!".to_string(),
        "Submit your project by Friday.".to_string(),
    ]);
    for ch in "Due Monday".chars() {
        board = AnnouncementsReducer::reduce(board, AnnouncementIntent::Input(ch));
    }
    let before_len = board.entries.len();
    let board = AnnouncementsReducer::reduce(board, AnnouncementIntent::Post);

    assert_eq!(board.entries.len(), before_len + 1);
    assert_eq!(board.entries[0], "Welcome to Peer Review Week!");
    assert_eq!(board.entries[1], "Submit your project by Friday.");
    assert_eq!(board.entries[2], "Due Monday");
}

#[test]
fn student_session_join_rate_feedback() {
    // Log in as a student.
    let mut session = SessionState::default();
    for ch in "Ada".chars() {
        session = SessionReducer::reduce(session, SessionIntent::Input(ch));
    }
    session = SessionReducer::reduce(session, SessionIntent::FocusNext);
    session = SessionReducer::reduce(session, SessionIntent::Input('p'));
    session = SessionReducer::reduce(session, SessionIntent::Submit);
    let user = session.user().expect("login should succeed").clone();
    assert_eq!(user.role, Role::Student);

    // Join twice (idempotent), vote twice (both recorded), leave feedback.
    let mut board = seeded_board();
    for _ in 0..2 {
        board = ProjectsReducer::reduce(
            board,
            ProjectIntent::Join {
                id: 1,
                member: user.name.clone(),
            },
        );
    }
    board = ProjectsReducer::reduce(board, ProjectIntent::Rate { id: 1, stars: 4 });
    board = ProjectsReducer::reduce(board, ProjectIntent::Rate { id: 1, stars: 5 });
    for ch in "Nice work".chars() {
        board = ProjectsReducer::reduce(board, ProjectIntent::FeedbackInput(ch));
    }
    board = ProjectsReducer::reduce(
        board,
        ProjectIntent::SubmitFeedback {
            id: 1,
            author: user.name.clone(),
        },
    );

    let project = board.get(1).unwrap();
    assert_eq!(project.members, vec!["Ada".to_string()]);
    assert_eq!(project.ratings, vec![4, 5]);
    assert_eq!(project.average_rating(), Some(4.5));
    assert_eq!(project.feedback, vec!["Ada: Nice work".to_string()]);

    // The sibling project is untouched by the whole session.
    assert_eq!(board.get(2), seeded_board().get(2));

    // Logout drops the identity.
    let session = SessionReducer::reduce(session, SessionIntent::Logout);
    assert!(session.user().is_none());
}
