use crate::host::{Buffer, ModeId};
use crate::sql::{Dialect, KeywordSet};
use crate::*;
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

type Slot = RefCell<Option<Rc<KeywordSet>>>;

/// Per-buffer, lazily built keyword set.
///
/// The set is resolved on first use and kept until `invalidate` is called,
/// normally from the buffer's dialect-change listener (see `invalidator`).
/// Nothing here is shared between buffers.
#[derive(Debug, Default)]
pub struct KeywordSetResolver {
    cache: Rc<Slot>,
}

impl KeywordSetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer's keyword set, built on first call after creation or
    /// invalidation.
    ///
    /// Resolution order:
    /// 1. Redis mode buffers use the Redis command words.
    /// 2. Buffers exposing keyword metadata use that metadata.
    /// 3. Everything else uses the built-in list for `dialect`.
    pub fn resolve<B: Buffer + ?Sized>(&self, buffer: &B, dialect: Dialect) -> Rc<KeywordSet> {
        if let Some(set) = self.cache.borrow().as_ref() {
            return Rc::clone(set);
        }
        let set = Rc::new(Self::build(buffer, dialect));
        *self.cache.borrow_mut() = Some(Rc::clone(&set));
        set
    }

    fn build<B: Buffer + ?Sized>(buffer: &B, dialect: Dialect) -> KeywordSet {
        if buffer.mode() == ModeId::Redis {
            let set = KeywordSet::redis();
            debug!("Resolved {} Redis keywords", set.len());
            return set;
        }
        if let Some(entries) = buffer.mode_keywords() {
            match KeywordSet::from_entries(&entries) {
                Ok(set) if !set.is_empty() => {
                    debug!("Resolved {} keywords from {} mode metadata", set.len(), buffer.mode());
                    return set;
                }
                Ok(_) => trace!("Mode metadata has no keywords, using the {dialect} list"),
                Err(err) => warn!("Ignoring keyword metadata of {} mode: {err}", buffer.mode()),
            }
        }
        let set = KeywordSet::builtin(dialect);
        debug!("Resolved {} built-in {dialect} keywords", set.len());
        set
    }

    /// Drop the cached set; the next `resolve` rebuilds it.
    pub fn invalidate(&self) {
        if self.cache.borrow_mut().take().is_some() {
            debug!("Keyword cache invalidated");
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// Listener for dialect changes that invalidates this resolver. Holds only
    /// a weak reference, so a listener outliving the resolver does nothing.
    pub fn invalidator(&self) -> impl Fn(Dialect) + 'static {
        let cache: Weak<Slot> = Rc::downgrade(&self.cache);
        move |dialect: Dialect| {
            if let Some(cache) = cache.upgrade() {
                debug!("Dialect changed to {dialect}, dropping keyword cache");
                cache.borrow_mut().take();
            }
        }
    }
}
