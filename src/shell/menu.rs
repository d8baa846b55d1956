//! Numbered menu entries.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    DeleteContact,
    SearchContacts,
    ShowAll,
    ShowBirthdays,
    Exit,
}

impl MenuChoice {
    /// Entries in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddContact,
        MenuChoice::DeleteContact,
        MenuChoice::SearchContacts,
        MenuChoice::ShowAll,
        MenuChoice::ShowBirthdays,
        MenuChoice::Exit,
    ];

    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.iter().copied().find(|c| c.number() == number)
    }

    /// The number shown next to this entry.
    pub fn number(self) -> usize {
        match self {
            Self::AddContact => 1,
            Self::DeleteContact => 2,
            Self::SearchContacts => 3,
            Self::ShowAll => 4,
            Self::ShowBirthdays => 5,
            Self::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddContact => "Add contact",
            Self::DeleteContact => "Delete contact",
            Self::SearchContacts => "Search contacts",
            Self::ShowAll => "Show all contacts",
            Self::ShowBirthdays => "Contacts birthday",
            Self::Exit => "Exit",
        }
    }
}
