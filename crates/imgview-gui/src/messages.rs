use imgview_core::surface::LoadTicket;

/// Load request sent from the UI thread to the loader thread.
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub src: String,
}

/// Results sent from the loader thread back to the UI thread.
pub enum LoadResult {
    Loaded {
        ticket: LoadTicket,
        src: String,
        image: egui::ColorImage,
    },
    Failed {
        ticket: LoadTicket,
        src: String,
        message: String,
    },
}
