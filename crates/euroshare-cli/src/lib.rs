//! Euroshare.eu command-line front end
//!
//! Stands in for a media-center host: it owns configuration and logging,
//! turns client data into listing rows, and reports network failures with a
//! single notification.
//!
//! ```text
//! $ euroshare -u user -p secret menu
//! Credit: 12,50 €                                                  menu
//! Search videos                                                    search
//! $ euroshare search "doctor who" --page 2 --sort size
//! $ euroshare stream "http://euroshare.eu/file/15474/doctor-who.avi/"
//! ```

pub mod cli;
pub mod commands;
pub mod menu;
