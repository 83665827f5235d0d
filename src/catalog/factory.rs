use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

pub fn create_catalog_service(store: RepositoryStore) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(store);
    let publisher = create_publisher();
    Box::new(CatalogServiceImpl::new(book_repo, publisher))
}
