//! Entradas a nivel de handle: aceptan un `Option<&Composer>` y reportan
//! `ComposeError::InvalidArgument` cuando el handle no existe.

use super::builder::Composer;
use super::compositor::Composed;
use super::finalize::ErrorPolicy;
use crate::errors::ComposeError;
use crate::step::TotalFn;

pub fn compose<I: 'static, O: 'static>(composer: Option<&Composer<I, O>>) -> Result<Composed<I, O>, ComposeError> {
    composer.ok_or(ComposeError::InvalidArgument)?.compose()
}

pub fn must_compose<I: 'static, O: 'static>(composer: Option<&Composer<I, O>>) -> Composed<I, O> {
    match compose(composer) {
        Ok(composed) => composed,
        Err(err) => panic!("failed to compose pipeline: {err}"),
    }
}

pub fn compose_total<I: 'static, O: Default + 'static>(composer: Option<&Composer<I, O>>,
                                                      policy: ErrorPolicy)
                                                      -> Result<TotalFn<I, O>, ComposeError> {
    composer.ok_or(ComposeError::InvalidArgument)?.compose_total(policy)
}

pub fn must_compose_total<I: 'static, O: Default + 'static>(composer: Option<&Composer<I, O>>,
                                                           policy: ErrorPolicy)
                                                           -> TotalFn<I, O> {
    must_compose(composer).into_total(policy)
}
