//! Which registry columns the result table shows.

use fincheck_model::RegistryField;

/// Visible result columns, always kept in registry column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    visible: Vec<RegistryField>,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            visible: RegistryField::ALL.to_vec(),
        }
    }
}

impl ColumnSelection {
    /// Build a selection from user input. An empty list means every column.
    pub fn from_fields(fields: &[RegistryField]) -> Self {
        if fields.is_empty() {
            return Self::default();
        }
        let visible = RegistryField::ALL
            .into_iter()
            .filter(|field| fields.contains(field))
            .collect();
        Self { visible }
    }

    pub fn is_visible(&self, field: RegistryField) -> bool {
        self.visible.contains(&field)
    }

    /// Flip one column on or off. The last visible column cannot be hidden.
    pub fn toggle(&mut self, field: RegistryField) {
        if self.is_visible(field) {
            if self.visible.len() > 1 {
                self.visible.retain(|visible| *visible != field);
            }
        } else {
            self.visible.push(field);
            self.visible.sort();
        }
    }

    pub fn fields(&self) -> &[RegistryField] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
