use crate::core::data::backend::Backend;
use crate::core::data::buffer_descriptor::BufferDescriptor;
use crate::core::data::view_state::ViewState;

/// Everything one frame needs, passed by value into each render call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub view: ViewState,
    pub buffer: BufferDescriptor,
    pub backend: Backend,
}

impl RenderRequest {
    #[must_use]
    pub fn new(view: ViewState, buffer: BufferDescriptor, backend: Backend) -> Self {
        Self {
            view,
            buffer,
            backend,
        }
    }

    #[must_use]
    pub fn with_backend(self, backend: Backend) -> Self {
        Self { backend, ..self }
    }
}
