//! Level command - level, floor, ceiling and bar for some experience

use crate::{PaintrError, level::LevelState, output};

/// Execute the level command
///
/// # Errors
/// Returns `PaintrError::InvalidInput` for a zero-length bar
pub fn execute(experience: u64, length: usize, quiet: bool) -> Result<(), PaintrError> {
    if length == 0 {
        return Err(PaintrError::InvalidInput("Bar length must be at least 1".into()));
    }
    let state = LevelState::new(experience);
    println!("{}", output::level_summary(&state, length, quiet));
    if !quiet {
        println!(
            "  Level {} started at {} XP, level {} starts at {} XP",
            state.level,
            state.floor,
            state.level + 1,
            state.ceiling
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(matches!(execute(5, 0, true), Err(PaintrError::InvalidInput(_))));
        assert!(execute(5, 24, true).is_ok());
    }
}
