// Two independent image loads gate rendering. Uploads carry a ticket so a
// slow decode can't overwrite a newer selection.

use crate::geometry::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Default, Debug, Clone)]
pub struct Readiness {
    frame_loaded: bool,
    user_image: Option<Size>,
    latest_ticket: u64,
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        self.frame_loaded && self.user_image.is_some()
    }

    pub fn mark_frame_loaded(&mut self) {
        self.frame_loaded = true;
    }

    /// Natural size of the accepted user image, if any.
    pub fn user_image(&self) -> Option<Size> {
        self.user_image
    }

    /// Issues a ticket for a new upload, superseding any in flight.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.latest_ticket += 1;
        UploadTicket(self.latest_ticket)
    }

    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Accepts a decoded image if `ticket` is still the latest and the image
    /// has a drawable size. The previous image stays in place otherwise.
    pub fn complete_upload(&mut self, ticket: UploadTicket, size: Size) -> bool {
        if !self.is_current(ticket) || !size.is_drawable() {
            return false;
        }
        self.user_image = Some(size);
        true
    }
}
