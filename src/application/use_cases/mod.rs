/// Use cases module containing application business logic orchestration
mod explore_dependencies;

pub use explore_dependencies::ExploreDependenciesUseCase;
