//! Application state wiring services together.
//!
//! Services are generic over the store and mailer ports; AppState pins them
//! to the boxed wrappers so the router can be built over real clients or
//! in-memory fakes alike.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use folio_core::contact::{ContactService, Notifier};
use folio_core::content::ContentLoader;
use folio_core::notify::DynMailer;
use folio_core::notify::template::NotificationRoute;
use folio_core::repository::DynTableStore;
use folio_infra::config::{EmailSettings, FolioConfig};
use folio_infra::resend::ResendMailer;
use folio_infra::supabase::SupabaseClient;

pub type ConcreteContactService = ContactService<DynTableStore, DynMailer>;

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ConcreteContactService>,
    pub content_loader: Arc<ContentLoader<DynTableStore>>,
    /// Static site directory served for unmatched paths.
    pub web_dir: PathBuf,
}

impl AppState {
    pub fn new(
        contact_service: ConcreteContactService,
        content_loader: ContentLoader<DynTableStore>,
        web_dir: PathBuf,
    ) -> Self {
        Self {
            contact_service: Arc::new(contact_service),
            content_loader: Arc::new(content_loader),
            web_dir,
        }
    }

    /// Wire the server from resolved configuration.
    ///
    /// The service-role backend is required: the contact endpoint cannot
    /// store anything without it. Email is optional.
    pub fn from_config(config: FolioConfig) -> anyhow::Result<Self> {
        let access = config.service_backend.context(
            "SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY must be set to run the server",
        )?;
        let store = DynTableStore::new(SupabaseClient::new(access)?);

        let notifier = match config.email {
            Some(settings) => Some(build_notifier(settings)?),
            None => {
                tracing::warn!("email provider not configured, contact notifications disabled");
                None
            }
        };

        let contact_service = ContactService::new(store.clone(), notifier);
        let content_loader = ContentLoader::new(store).with_blog_limit(config.site.blog_limit);

        Ok(Self::new(
            contact_service,
            content_loader,
            PathBuf::from(config.site.web_dir),
        ))
    }
}

fn build_notifier(settings: EmailSettings) -> anyhow::Result<Notifier<DynMailer>> {
    let mailer = ResendMailer::new(settings.api_key)?;
    Ok(Notifier {
        mailer: DynMailer::new(mailer),
        route: NotificationRoute {
            from: settings.from,
            to: settings.to,
        },
    })
}
