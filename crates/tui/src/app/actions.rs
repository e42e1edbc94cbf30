use std::time::Instant;

use anyhow::Result;
use iconpick_core::{PickerOutcome, SessionPhase, Transition};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl<'a> App<'a> {
	/// Process a keyboard event and return the outcome once the session ends.
	pub(crate) fn handle_key(
		&mut self,
		key: KeyEvent,
		now: Instant,
	) -> Result<Option<PickerOutcome>> {
		let transition = match key.code {
			KeyCode::Esc => {
				self.session.cancel()?;
				Transition::Applied
			}
			KeyCode::Enter => self.pick_highlighted()?,
			KeyCode::Tab => self.cycle_category(1),
			KeyCode::BackTab => self.cycle_category(-1),
			KeyCode::PageDown => self.session.next_page(),
			KeyCode::PageUp => self.session.previous_page(),
			KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.session.next_page()
			}
			KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.session.previous_page()
			}
			KeyCode::Char('r') if self.phase() == SessionPhase::LoadFailed => {
				self.session.retry()
			}
			KeyCode::Left => self.move_cursor(-1),
			KeyCode::Right => self.move_cursor(1),
			KeyCode::Up => self.move_cursor(-self.grid_cols()),
			KeyCode::Down => self.move_cursor(self.grid_cols()),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.session.input_search(text, now);
				}
				Transition::Ignored
			}
		};

		if transition.is_applied() {
			self.refresh_view();
		}
		Ok(self.take_outcome())
	}

	fn pick_highlighted(&mut self) -> Result<Transition> {
		if self.phase() != SessionPhase::Ready || self.visible_len() == 0 {
			return Ok(Transition::Ignored);
		}
		self.session.select_visible(self.cursor)?;
		Ok(Transition::Applied)
	}

	fn cycle_category(&mut self, step: isize) -> Transition {
		let Some(view) = self.view.as_ref() else {
			return Transition::Ignored;
		};
		let len = view.categories.len() as isize;
		if len == 0 {
			return Transition::Ignored;
		}
		let next = (view.category_index() as isize + step).rem_euclid(len) as usize;
		let category = view.categories[next].clone();
		let transition = self.session.set_category(&category);
		if transition.is_applied() {
			self.cursor = 0;
		}
		transition
	}

	fn move_cursor(&mut self, delta: isize) -> Transition {
		let visible = self.visible_len();
		if visible == 0 {
			return Transition::Ignored;
		}
		let target = self.cursor as isize + delta;
		if target < 0 || target >= visible as isize {
			return Transition::Ignored;
		}
		self.cursor = target as usize;
		Transition::Ignored
	}

	fn grid_cols(&self) -> isize {
		self.session.layout().cols() as isize
	}
}
