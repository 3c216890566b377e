//! The interactive menu loop.
//!
//! Each menu choice collects its inputs through the [`Prompter`], calls one
//! `CustomerApi` method, and renders the returned customers followed by the
//! messages. Malformed numbers abandon the current choice; end of input ends
//! the session.

use super::prompt::{parse_number, Prompter};
use super::render::Renderer;
use custman::api::{
    CmdMessage, CmdResult, CustomerApi, CustomerUpdate, SearchCriterion, SortKey,
};
use custman::error::{CustomerError, Result};
use custman::model::NewCustomer;
use custman::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

pub const INVALID_CHOICE_MESSAGE: &str = "Invalid!";
pub const FAREWELL_MESSAGE: &str = "Thank You! Visit again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<S: DataStore, R, W> {
    api: CustomerApi<S>,
    prompter: Prompter<R, W>,
    renderer: Renderer,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: CustomerApi<S>, prompter: Prompter<R, W>, renderer: Renderer) -> Self {
        Self {
            api,
            prompter,
            renderer,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        let menu = self.renderer.render_menu()?;
        self.prompter.write_line(&menu)?;

        let Some(choice) = self.prompter.ask("Enter your Choice: ")? else {
            return Ok(Flow::Quit);
        };
        debug!(%choice, "menu selection");

        match choice.as_str() {
            "1" => self.handle_add(false)?,
            "2" => self.handle_add(true)?,
            "3" => self.handle_view()?,
            "4" => self.handle_search()?,
            "5" => self.handle_update()?,
            "6" => self.handle_delete()?,
            "7" => self.handle_sort()?,
            "8" => {
                if self.handle_exit()? {
                    return Ok(Flow::Quit);
                }
            }
            _ => self.show_messages(&[CmdMessage::error(INVALID_CHOICE_MESSAGE)])?,
        }

        if self.prompter.is_closed() {
            Ok(Flow::Quit)
        } else {
            Ok(Flow::Continue)
        }
    }

    fn handle_add(&mut self, premium: bool) -> Result<()> {
        let Some(id) = self.ask_number("ID")? else {
            return Ok(());
        };
        let Some(name) = self.prompter.ask("Name: ")? else {
            return Ok(());
        };
        let Some(address) = self.prompter.ask("Address: ")? else {
            return Ok(());
        };
        let Some(code) = self.prompter.ask("Code: ")? else {
            return Ok(());
        };
        let Some(product) = self.prompter.ask("Product: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompter.ask("Category: ")? else {
            return Ok(());
        };

        let mut draft = NewCustomer::new(id, name, address, code, product, category);
        if premium {
            let Some(points) = self.ask_number("Reward Points")? else {
                return Ok(());
            };
            draft = draft.premium(points);
        }

        let result = self.api.add_customer(draft)?;
        self.show_messages(&result.messages)
    }

    fn handle_view(&mut self) -> Result<()> {
        let result = self.api.view_customers()?;
        self.show(&result)
    }

    fn handle_search(&mut self) -> Result<()> {
        let Some(mode) = self.prompter.ask("Search by (1)ID (2)Name (3)Code: ")? else {
            return Ok(());
        };

        let criterion = match mode.as_str() {
            "1" => match self.ask_number("ID")? {
                Some(id) => SearchCriterion::Id(id),
                None => return Ok(()),
            },
            "2" => match self.prompter.ask("Name: ")? {
                Some(name) => SearchCriterion::Name(name),
                None => return Ok(()),
            },
            "3" => match self.prompter.ask("Code: ")? {
                Some(code) => SearchCriterion::Code(code),
                None => return Ok(()),
            },
            _ => return self.show_messages(&[CmdMessage::error(INVALID_CHOICE_MESSAGE)]),
        };

        let result = self.api.search_customers(&criterion)?;
        self.show(&result)
    }

    fn handle_update(&mut self) -> Result<()> {
        let Some(id) = self.ask_number("ID to update")? else {
            return Ok(());
        };
        if self.api.find_by_id(id).is_none() {
            let err = CustomerError::NotFound(format!("customer {}", id));
            return self.show_messages(&[CmdMessage::from(&err)]);
        }

        let mut update = CustomerUpdate::new();
        for (label, slot) in [
            ("Name: ", &mut update.name),
            ("Address: ", &mut update.address),
            ("Product: ", &mut update.product),
            ("Category: ", &mut update.category),
        ] {
            match self.prompter.ask(label)? {
                Some(value) => *slot = Some(value),
                None => return Ok(()),
            }
        }

        let result = self.api.update_customer(id, &update)?;
        self.show_messages(&result.messages)
    }

    fn handle_delete(&mut self) -> Result<()> {
        let Some(id) = self.ask_number("ID to delete")? else {
            return Ok(());
        };

        let found = self.api.search_customers(&SearchCriterion::Id(id))?;
        if found.listed_customers.is_empty() {
            let err = CustomerError::NotFound(format!("customer {}", id));
            return self.show_messages(&[CmdMessage::from(&err)]);
        }
        self.show(&found)?;

        let Some(confirmed) = self
            .prompter
            .confirm("Are you sure you want to remove this Customer? (Y/N): ")?
        else {
            return Ok(());
        };

        let result = self.api.delete_customer(id, confirmed)?;
        self.show_messages(&result.messages)
    }

    fn handle_sort(&mut self) -> Result<()> {
        let Some(choice) = self.prompter.ask("Sort by (1)Name (2)ID: ")? else {
            return Ok(());
        };
        // Anything other than "1" sorts by id.
        let key = match choice.as_str() {
            "1" => SortKey::Name,
            _ => SortKey::Id,
        };

        let result = self.api.sort_customers(key)?;
        self.show(&result)
    }

    /// Returns true when the user confirmed leaving.
    fn handle_exit(&mut self) -> Result<bool> {
        match self.prompter.confirm("Exit? (Y/N): ")? {
            Some(true) => {
                self.show_messages(&[CmdMessage::success(FAREWELL_MESSAGE)])?;
                Ok(true)
            }
            Some(false) => Ok(false),
            None => Ok(true),
        }
    }

    /// Reads an integer for `field`. `None` when input ended or the value was
    /// malformed; the latter is reported to the user.
    fn ask_number(&mut self, field: &str) -> Result<Option<i64>> {
        let Some(raw) = self.prompter.ask(&format!("{}: ", field))? else {
            return Ok(None);
        };
        match parse_number(field, &raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                debug!(error = %err, "malformed number");
                self.show_messages(&[CmdMessage::from(&err)])?;
                Ok(None)
            }
        }
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        let listing = self.renderer.render_customers(&result.listed_customers)?;
        self.prompter.write(&listing)?;
        self.show_messages(&result.messages)
    }

    fn show_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        let output = self.renderer.render_messages(messages)?;
        self.prompter.write(&output)
    }

    #[cfg(test)]
    fn into_parts(self) -> (CustomerApi<S>, W) {
        (self.api, self.prompter.into_output())
    }
}
