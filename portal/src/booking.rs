//! Appointment booking wizard.
//!
//! DESIGN
//! ======
//! A linear step counter that collects doctor, slot and reason before one
//! `POST /appointments`. There is no cancellation or rollback: `back()`
//! walks one step at a time and `reset()` starts over. Transitions refuse
//! to skip a step whose input is incomplete.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::types::{AppointmentRequest, TimeSlot};

/// Number of selectable days, starting today.
pub const BOOKING_WINDOW_DAYS: u64 = 14;
pub const REASON_MAX_CHARS: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingStep {
    ChooseDoctor,
    ChooseSlot,
    Details,
    Confirm,
    Submitted,
}

impl BookingStep {
    pub const ALL: [Self; 5] = [Self::ChooseDoctor, Self::ChooseSlot, Self::Details, Self::Confirm, Self::Submitted];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ChooseDoctor => "Médecin",
            Self::ChooseSlot => "Créneau",
            Self::Details => "Motif",
            Self::Confirm => "Confirmation",
            Self::Submitted => "Envoyé",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::ChooseDoctor => Self::ChooseSlot,
            Self::ChooseSlot => Self::Details,
            Self::Details => Self::Confirm,
            Self::Confirm | Self::Submitted => Self::Submitted,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::ChooseDoctor | Self::ChooseSlot => Self::ChooseDoctor,
            Self::Details => Self::ChooseSlot,
            Self::Confirm => Self::Details,
            Self::Submitted => Self::Submitted,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Choisissez d'abord un médecin")]
    NoDoctor,
    #[error("Cette date est hors de la période de réservation")]
    DateOutOfWindow,
    #[error("Ce créneau n'est pas disponible")]
    SlotUnavailable,
    #[error("Ce créneau est déjà passé")]
    SlotInPast,
    #[error("Le motif ne peut pas dépasser 500 caractères")]
    ReasonTooLong,
    #[error("Veuillez compléter cette étape")]
    Incomplete,
    #[error("La demande a déjà été envoyée")]
    AlreadySubmitted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorChoice {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingWizard {
    step: BookingStep,
    today: NaiveDate,
    doctor: Option<DoctorChoice>,
    date: NaiveDate,
    slot: Option<TimeSlot>,
    reason: String,
}

impl BookingWizard {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self { step: BookingStep::ChooseDoctor, today, doctor: None, date: today, slot: None, reason: String::new() }
    }

    #[must_use]
    pub fn step(&self) -> BookingStep {
        self.step
    }

    #[must_use]
    pub fn doctor(&self) -> Option<&DoctorChoice> {
        self.doctor.as_ref()
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn slot(&self) -> Option<&TimeSlot> {
        self.slot.as_ref()
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    fn ensure_open(&self) -> Result<(), BookingError> {
        if self.step == BookingStep::Submitted { Err(BookingError::AlreadySubmitted) } else { Ok(()) }
    }

    /// Pick a doctor. Changing doctor drops any chosen slot and, if the
    /// wizard was past slot selection, returns it there.
    ///
    /// # Errors
    ///
    /// [`BookingError::AlreadySubmitted`] after submission.
    pub fn select_doctor(&mut self, id: &str, name: &str) -> Result<(), BookingError> {
        self.ensure_open()?;
        let changed = self.doctor.as_ref().is_none_or(|d| d.id != id);
        if changed {
            self.slot = None;
            if self.step.index() > BookingStep::ChooseSlot.index() {
                self.step = BookingStep::ChooseSlot;
            }
        }
        self.doctor = Some(DoctorChoice { id: id.to_owned(), name: name.to_owned() });
        Ok(())
    }

    /// Pick the day whose slots are listed. A chosen slot on another day is dropped.
    ///
    /// # Errors
    ///
    /// [`BookingError::DateOutOfWindow`] outside [`booking_days`].
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        self.ensure_open()?;
        if !in_window(self.today, date) {
            return Err(BookingError::DateOutOfWindow);
        }
        if self.slot.as_ref().is_some_and(|s| s.start_time.date() != date) {
            self.slot = None;
        }
        self.date = date;
        Ok(())
    }

    /// Pick a slot for the chosen doctor.
    ///
    /// # Errors
    ///
    /// Rejects slots without a doctor chosen, slots that are not available,
    /// already started, or outside the booking window.
    pub fn select_slot(&mut self, slot: &TimeSlot, now: NaiveDateTime) -> Result<(), BookingError> {
        self.ensure_open()?;
        if self.doctor.is_none() {
            return Err(BookingError::NoDoctor);
        }
        if !slot.is_bookable() {
            return Err(BookingError::SlotUnavailable);
        }
        if slot.start_time <= now {
            return Err(BookingError::SlotInPast);
        }
        if !in_window(self.today, slot.start_time.date()) {
            return Err(BookingError::DateOutOfWindow);
        }
        self.date = slot.start_time.date();
        self.slot = Some(slot.clone());
        Ok(())
    }

    /// # Errors
    ///
    /// [`BookingError::ReasonTooLong`] past [`REASON_MAX_CHARS`]; the previous
    /// reason is kept.
    pub fn set_reason(&mut self, text: &str) -> Result<(), BookingError> {
        self.ensure_open()?;
        if text.chars().count() > REASON_MAX_CHARS {
            return Err(BookingError::ReasonTooLong);
        }
        text.clone_into(&mut self.reason);
        Ok(())
    }

    /// Whether the current step has what it needs to move on.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.step {
            BookingStep::ChooseDoctor => self.doctor.is_some(),
            BookingStep::ChooseSlot => self.slot.is_some(),
            BookingStep::Details => !self.reason.trim().is_empty(),
            BookingStep::Confirm | BookingStep::Submitted => false,
        }
    }

    /// Advance one step. Leaving `Confirm` goes through [`Self::mark_submitted`].
    ///
    /// # Errors
    ///
    /// [`BookingError::Incomplete`] when the current step is not filled in.
    pub fn next(&mut self) -> Result<BookingStep, BookingError> {
        self.ensure_open()?;
        if !self.can_advance() {
            return Err(BookingError::Incomplete);
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    /// Step back once; no-op on the first step and after submission.
    pub fn back(&mut self) -> BookingStep {
        self.step = self.step.previous();
        self.step
    }

    /// The single create call, available on the confirmation step.
    ///
    /// # Errors
    ///
    /// [`BookingError::Incomplete`] on any other step.
    pub fn request(&self, patient_id: &str) -> Result<AppointmentRequest, BookingError> {
        self.ensure_open()?;
        let (BookingStep::Confirm, Some(doctor), Some(slot)) = (self.step, &self.doctor, &self.slot) else {
            return Err(BookingError::Incomplete);
        };
        Ok(AppointmentRequest {
            patient_id: patient_id.to_owned(),
            doctor_id: doctor.id.clone(),
            appointment_date_time: slot.start_time,
            reason: self.reason.trim().to_owned(),
        })
    }

    /// # Errors
    ///
    /// [`BookingError::Incomplete`] unless on the confirmation step.
    pub fn mark_submitted(&mut self) -> Result<(), BookingError> {
        self.ensure_open()?;
        if self.step != BookingStep::Confirm {
            return Err(BookingError::Incomplete);
        }
        self.step = BookingStep::Submitted;
        Ok(())
    }

    /// Start over from the first step.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}

fn in_window(today: NaiveDate, date: NaiveDate) -> bool {
    today
        .checked_add_days(Days::new(BOOKING_WINDOW_DAYS))
        .is_some_and(|end| date >= today && date < end)
}

/// The selectable dates, today first.
#[must_use]
pub fn booking_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..BOOKING_WINDOW_DAYS).filter_map(|offset| today.checked_add_days(Days::new(offset))).collect()
}
