//! Interactive input.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use queenforge_core::board_size;

use crate::error::CliError;

/// Asks for the number of queens until a positive integer is entered.
pub fn prompt_board_size() -> Result<usize, CliError> {
    let n: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the number of queens to be used in this puzzle")
        .validate_with(|n: &i64| -> Result<(), &'static str> {
            if *n > 0 {
                Ok(())
            } else {
                Err("Number has to be higher than 0")
            }
        })
        .interact_text()?;
    Ok(board_size(n)?)
}
