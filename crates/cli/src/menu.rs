use core::str::FromStr;

/// Entries of the main menu, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuOption {
    AddElectronic,
    AddFood,
    AddClothing,
    FindById,
    UpdatePrice,
    DeleteById,
    ListAll,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 8] = [
        MenuOption::AddElectronic,
        MenuOption::AddFood,
        MenuOption::AddClothing,
        MenuOption::FindById,
        MenuOption::UpdatePrice,
        MenuOption::DeleteById,
        MenuOption::ListAll,
        MenuOption::Exit,
    ];

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|o| *o == self)
            .map_or(0, |idx| idx + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::AddElectronic => "Add electronic product",
            MenuOption::AddFood => "Add food product",
            MenuOption::AddClothing => "Add clothing product",
            MenuOption::FindById => "Find product by ID",
            MenuOption::UpdatePrice => "Update product price",
            MenuOption::DeleteById => "Delete product by ID",
            MenuOption::ListAll => "List all products",
            MenuOption::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s.trim().parse().map_err(|_| ())?;
        n.checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(())
    }
}

/// The menu as printed before each selection.
pub fn render() -> String {
    let mut out = String::from("=============== Inventory Management ===============\n");
    for option in MenuOption::ALL {
        out.push_str(&format!("{}. {}\n", option.number(), option.label()));
    }
    out.push_str("====================================================");
    out
}
