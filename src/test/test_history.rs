
mod test {
    use crate::core::Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    const CORRIDOR: &str = r#"
#######
#@$  .#
#######
"#;

    #[test]
    fn undo_restores_state_before_last_move(){
        let mut game = GameTestState::new(CORRIDOR);
        game.assert_moves(&[Right, Right]);
        game.assert_matches(r#"
#######
#  @$.#
#######
"#);
        assert!(game.undo());
        game.assert_matches(r#"
#######
# @$ .#
#######
"#);
        assert!(game.undo());
        game.assert_matches(CORRIDOR);
        assert!(!game.undo());
        game.assert_matches(CORRIDOR);
    }

    #[test]
    fn redo_reapplies_undone_moves(){
        let mut game = GameTestState::new(CORRIDOR);
        game.assert_moves(&[Right, Right, Right]);
        let solved = game.session.grid().clone();
        assert!(game.session.is_solved());

        assert!(game.undo());
        assert!(game.undo());
        assert!(!game.session.is_solved());
        assert!(game.redo());
        assert!(game.redo());
        assert_eq!(game.session.grid(), &solved);
        assert!(game.session.is_solved());
        assert!(!game.redo());
    }

    #[test]
    fn new_move_after_undo_discards_redo_branch(){
        let mut game = GameTestState::new(r#"
#####
#   #
#@$.#
#####
"#);
        game.assert_move(Up);
        assert!(game.undo());
        assert!(game.session.can_redo());

        game.assert_move(Right);
        assert!(!game.session.can_redo());
        assert!(!game.redo());
        assert_eq!(game.session.history().len(), 2);
        assert!(game.session.is_solved());
    }

    #[test]
    fn undo_moves_cached_actor(){
        let mut game = GameTestState::new(CORRIDOR);
        game.assert_move(Right);
        assert_eq!(game.session.actor(), Vec2::new(2, 1));
        game.undo();
        assert_eq!(game.session.actor(), Vec2::new(1, 1));
        // the cached position must stay usable for the next move
        game.assert_move(Right);
        assert_eq!(game.session.actor(), Vec2::new(2, 1));
    }

    #[test]
    fn blocked_moves_are_not_recorded(){
        let mut game = GameTestState::new(CORRIDOR);
        game.assert_blocked(Up);
        game.assert_blocked(Left);
        assert_eq!(game.session.move_count(), 0);
        assert_eq!(game.session.history().len(), 1);
        assert!(!game.undo());
    }

    #[test]
    fn perform_reports_results(){
        let mut game = GameTestState::new(CORRIDOR);
        let session = &mut game.session;
        assert_eq!(session.perform(UserAction::Undo), Ok(ActionResult::NoChange));
        assert_eq!(session.perform(UserAction::Move(Left)), Ok(ActionResult::NoChange));
        assert_eq!(
            session.perform(UserAction::Move(Right)),
            Ok(ActionResult::Moved(MoveOutcome::Pushed))
        );
        assert_eq!(session.perform(UserAction::Undo), Ok(ActionResult::Undone));
        assert_eq!(session.perform(UserAction::Redo), Ok(ActionResult::Redone));
        assert_eq!(session.perform(UserAction::Redo), Ok(ActionResult::NoChange));
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn restart_is_undoable(){
        let mut game = GameTestState::new(CORRIDOR);
        assert_eq!(game.session.restart(), Ok(false));
        game.assert_moves(&[Right, Right]);

        assert_eq!(game.session.restart(), Ok(true));
        game.assert_matches(CORRIDOR);
        assert_eq!(game.session.actor(), Vec2::new(1, 1));
        assert_eq!(game.session.move_count(), 3);

        assert!(game.undo());
        game.assert_matches(r#"
#######
#  @$.#
#######
"#);
    }

    #[test]
    fn creating_a_session_requires_exactly_one_player(){
        let grid = Grid::new(vec![vec![Cell::Wall, Cell::Box, Cell::Target]]);
        assert_eq!(GameSession::new(grid).err(), Some(GameError::NoActor));

        let grid = Grid::new(vec![vec![Cell::Player, Cell::PlayerOnTarget]]);
        assert_eq!(GameSession::new(grid).err(), Some(GameError::MultipleActors(2)));
    }
}
