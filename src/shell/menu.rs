//! Menu choices

/// The five entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    CreateStudent = 1,
    ShowStudent = 2,
    CreateRoster = 3,
    ShowRoster = 4,
    Exit = 5,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::CreateStudent,
        MenuChoice::ShowStudent,
        MenuChoice::CreateRoster,
        MenuChoice::ShowRoster,
        MenuChoice::Exit,
    ];

    /// Map a menu number to its choice
    pub fn from_number(number: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| *choice as i32 == number)
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateStudent => "Create and Serialize Single Student",
            MenuChoice::ShowStudent => "Deserialize and Display Single Student",
            MenuChoice::CreateRoster => "Serialize Multiple Students",
            MenuChoice::ShowRoster => "Deserialize and Display Multiple Students",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Hint shown when this operation finds no file to read
    pub fn missing_file_hint(self) -> Option<&'static str> {
        match self {
            MenuChoice::ShowStudent => Some("Please create and serialize a student first."),
            MenuChoice::ShowRoster => Some("Please serialize multiple students first."),
            _ => None,
        }
    }
}
