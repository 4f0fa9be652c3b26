//! UI panels rendering

mod campaigns;
mod modals;
mod overview;
mod reports;
mod top;
