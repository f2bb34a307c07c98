//! The IMM client

use crate::models::*;
use crate::{operations, ENDPOINT_TYPE, PRODUCT};
use cloud_bindings_client::{
    ApiClient, ApiResponse, Blocking, HttpTransport, RuntimeOptions, Transport,
};
use cloud_bindings_common::{ClientConfig, Result};
use tracing::debug;

/// Typed client for every IMM operation.
///
/// Each method is a thin wrapper: the request is validated, shrunk and
/// flattened, then handed to the transport with the operation's fixed
/// metadata. Use [`ImmClient::blocking`] for synchronous calls.
#[derive(Debug, Clone)]
pub struct ImmClient<T: Transport = HttpTransport> {
    api: ApiClient<T>,
}

impl ImmClient<HttpTransport> {
    /// Build a client over HTTPS, resolving the regional `imm` endpoint
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config, PRODUCT, ENDPOINT_TYPE)?;
        debug!(endpoint = transport.endpoint(), "created IMM client");
        Ok(Self::with_transport(transport))
    }

    pub fn endpoint(&self) -> &str {
        self.api.transport().endpoint()
    }
}

impl<T: Transport> ImmClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            api: ApiClient::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        self.api.transport()
    }

    /// Wrap this client for synchronous use
    pub fn blocking(self) -> Result<Blocking<Self>> {
        Blocking::new(self)
    }

    // Projects
    /// Create a project
    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<ApiResponse<CreateProjectResponseBody>> {
        self.create_project_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn create_project_with_options(
        &self,
        request: &CreateProjectRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<CreateProjectResponseBody>> {
        self.api.execute::<operations::CreateProject>(request, runtime).await
    }

    /// Fetch a project, optionally with usage statistics
    pub async fn get_project(
        &self,
        request: &GetProjectRequest,
    ) -> Result<ApiResponse<GetProjectResponseBody>> {
        self.get_project_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn get_project_with_options(
        &self,
        request: &GetProjectRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<GetProjectResponseBody>> {
        self.api.execute::<operations::GetProject>(request, runtime).await
    }

    /// Update a project's description, quotas or tags
    pub async fn update_project(
        &self,
        request: &UpdateProjectRequest,
    ) -> Result<ApiResponse<UpdateProjectResponseBody>> {
        self.update_project_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn update_project_with_options(
        &self,
        request: &UpdateProjectRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<UpdateProjectResponseBody>> {
        self.api.execute::<operations::UpdateProject>(request, runtime).await
    }

    /// Delete an empty project
    pub async fn delete_project(
        &self,
        request: &DeleteProjectRequest,
    ) -> Result<ApiResponse<DeleteProjectResponseBody>> {
        self.delete_project_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn delete_project_with_options(
        &self,
        request: &DeleteProjectRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<DeleteProjectResponseBody>> {
        self.api.execute::<operations::DeleteProject>(request, runtime).await
    }

    /// List projects, one page at a time
    pub async fn list_projects(
        &self,
        request: &ListProjectsRequest,
    ) -> Result<ApiResponse<ListProjectsResponseBody>> {
        self.list_projects_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn list_projects_with_options(
        &self,
        request: &ListProjectsRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<ListProjectsResponseBody>> {
        self.api.execute::<operations::ListProjects>(request, runtime).await
    }

    // Datasets
    /// Create a dataset inside a project
    pub async fn create_dataset(
        &self,
        request: &CreateDatasetRequest,
    ) -> Result<ApiResponse<CreateDatasetResponseBody>> {
        self.create_dataset_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn create_dataset_with_options(
        &self,
        request: &CreateDatasetRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<CreateDatasetResponseBody>> {
        self.api.execute::<operations::CreateDataset>(request, runtime).await
    }

    pub async fn get_dataset(
        &self,
        request: &GetDatasetRequest,
    ) -> Result<ApiResponse<GetDatasetResponseBody>> {
        self.get_dataset_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn get_dataset_with_options(
        &self,
        request: &GetDatasetRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<GetDatasetResponseBody>> {
        self.api.execute::<operations::GetDataset>(request, runtime).await
    }

    pub async fn update_dataset(
        &self,
        request: &UpdateDatasetRequest,
    ) -> Result<ApiResponse<UpdateDatasetResponseBody>> {
        self.update_dataset_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn update_dataset_with_options(
        &self,
        request: &UpdateDatasetRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<UpdateDatasetResponseBody>> {
        self.api.execute::<operations::UpdateDataset>(request, runtime).await
    }

    pub async fn delete_dataset(
        &self,
        request: &DeleteDatasetRequest,
    ) -> Result<ApiResponse<DeleteDatasetResponseBody>> {
        self.delete_dataset_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn delete_dataset_with_options(
        &self,
        request: &DeleteDatasetRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<DeleteDatasetResponseBody>> {
        self.api.execute::<operations::DeleteDataset>(request, runtime).await
    }

    pub async fn list_datasets(
        &self,
        request: &ListDatasetsRequest,
    ) -> Result<ApiResponse<ListDatasetsResponseBody>> {
        self.list_datasets_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn list_datasets_with_options(
        &self,
        request: &ListDatasetsRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<ListDatasetsResponseBody>> {
        self.api.execute::<operations::ListDatasets>(request, runtime).await
    }

    // Bindings
    /// Bind a storage location to a dataset so new files are indexed
    pub async fn create_binding(
        &self,
        request: &CreateBindingRequest,
    ) -> Result<ApiResponse<CreateBindingResponseBody>> {
        self.create_binding_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn create_binding_with_options(
        &self,
        request: &CreateBindingRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<CreateBindingResponseBody>> {
        self.api.execute::<operations::CreateBinding>(request, runtime).await
    }

    pub async fn get_binding(
        &self,
        request: &GetBindingRequest,
    ) -> Result<ApiResponse<GetBindingResponseBody>> {
        self.get_binding_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn get_binding_with_options(
        &self,
        request: &GetBindingRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<GetBindingResponseBody>> {
        self.api.execute::<operations::GetBinding>(request, runtime).await
    }

    pub async fn list_bindings(
        &self,
        request: &ListBindingsRequest,
    ) -> Result<ApiResponse<ListBindingsResponseBody>> {
        self.list_bindings_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn list_bindings_with_options(
        &self,
        request: &ListBindingsRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<ListBindingsResponseBody>> {
        self.api.execute::<operations::ListBindings>(request, runtime).await
    }

    pub async fn delete_binding(
        &self,
        request: &DeleteBindingRequest,
    ) -> Result<ApiResponse<DeleteBindingResponseBody>> {
        self.delete_binding_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn delete_binding_with_options(
        &self,
        request: &DeleteBindingRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<DeleteBindingResponseBody>> {
        self.api.execute::<operations::DeleteBinding>(request, runtime).await
    }

    /// Resume a stopped binding
    pub async fn resume_binding(
        &self,
        request: &ResumeBindingRequest,
    ) -> Result<ApiResponse<ResumeBindingResponseBody>> {
        self.resume_binding_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn resume_binding_with_options(
        &self,
        request: &ResumeBindingRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<ResumeBindingResponseBody>> {
        self.api.execute::<operations::ResumeBinding>(request, runtime).await
    }

    pub async fn stop_binding(
        &self,
        request: &StopBindingRequest,
    ) -> Result<ApiResponse<StopBindingResponseBody>> {
        self.stop_binding_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn stop_binding_with_options(
        &self,
        request: &StopBindingRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<StopBindingResponseBody>> {
        self.api.execute::<operations::StopBinding>(request, runtime).await
    }

    // File metadata
    /// Index one file asynchronously
    pub async fn index_file_meta(
        &self,
        request: &IndexFileMetaRequest,
    ) -> Result<ApiResponse<IndexFileMetaResponseBody>> {
        self.index_file_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn index_file_meta_with_options(
        &self,
        request: &IndexFileMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<IndexFileMetaResponseBody>> {
        self.api.execute::<operations::IndexFileMeta>(request, runtime).await
    }

    /// Index up to 100 files asynchronously
    pub async fn batch_index_file_meta(
        &self,
        request: &BatchIndexFileMetaRequest,
    ) -> Result<ApiResponse<BatchIndexFileMetaResponseBody>> {
        self.batch_index_file_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn batch_index_file_meta_with_options(
        &self,
        request: &BatchIndexFileMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<BatchIndexFileMetaResponseBody>> {
        self.api.execute::<operations::BatchIndexFileMeta>(request, runtime).await
    }

    pub async fn get_file_meta(
        &self,
        request: &GetFileMetaRequest,
    ) -> Result<ApiResponse<GetFileMetaResponseBody>> {
        self.get_file_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn get_file_meta_with_options(
        &self,
        request: &GetFileMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<GetFileMetaResponseBody>> {
        self.api.execute::<operations::GetFileMeta>(request, runtime).await
    }

    pub async fn batch_get_file_meta(
        &self,
        request: &BatchGetFileMetaRequest,
    ) -> Result<ApiResponse<BatchGetFileMetaResponseBody>> {
        self.batch_get_file_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn batch_get_file_meta_with_options(
        &self,
        request: &BatchGetFileMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<BatchGetFileMetaResponseBody>> {
        self.api.execute::<operations::BatchGetFileMeta>(request, runtime).await
    }

    /// Update caller-supplied metadata of an indexed file
    pub async fn update_file_meta(
        &self,
        request: &UpdateFileMetaRequest,
    ) -> Result<ApiResponse<UpdateFileMetaResponseBody>> {
        self.update_file_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn update_file_meta_with_options(
        &self,
        request: &UpdateFileMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<UpdateFileMetaResponseBody>> {
        self.api.execute::<operations::UpdateFileMeta>(request, runtime).await
    }

    pub async fn batch_update_file_meta(
        &self,
        request: &BatchUpdateFileMetaRequest,
    ) -> Result<ApiResponse<BatchUpdateFileMetaResponseBody>> {
        self.batch_update_file_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn batch_update_file_meta_with_options(
        &self,
        request: &BatchUpdateFileMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<BatchUpdateFileMetaResponseBody>> {
        self.api.execute::<operations::BatchUpdateFileMeta>(request, runtime).await
    }

    pub async fn delete_file_meta(
        &self,
        request: &DeleteFileMetaRequest,
    ) -> Result<ApiResponse<DeleteFileMetaResponseBody>> {
        self.delete_file_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn delete_file_meta_with_options(
        &self,
        request: &DeleteFileMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<DeleteFileMetaResponseBody>> {
        self.api.execute::<operations::DeleteFileMeta>(request, runtime).await
    }

    pub async fn batch_delete_file_meta(
        &self,
        request: &BatchDeleteFileMetaRequest,
    ) -> Result<ApiResponse<BatchDeleteFileMetaResponseBody>> {
        self.batch_delete_file_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn batch_delete_file_meta_with_options(
        &self,
        request: &BatchDeleteFileMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<BatchDeleteFileMetaResponseBody>> {
        self.api.execute::<operations::BatchDeleteFileMeta>(request, runtime).await
    }

    // Queries
    /// Structured query with optional aggregations
    pub async fn simple_query(
        &self,
        request: &SimpleQueryRequest,
    ) -> Result<ApiResponse<SimpleQueryResponseBody>> {
        self.simple_query_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn simple_query_with_options(
        &self,
        request: &SimpleQueryRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<SimpleQueryResponseBody>> {
        self.api.execute::<operations::SimpleQuery>(request, runtime).await
    }

    /// Free-text query across indexed fields
    pub async fn fuzzy_query(
        &self,
        request: &FuzzyQueryRequest,
    ) -> Result<ApiResponse<FuzzyQueryResponseBody>> {
        self.fuzzy_query_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn fuzzy_query_with_options(
        &self,
        request: &FuzzyQueryRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<FuzzyQueryResponseBody>> {
        self.api.execute::<operations::FuzzyQuery>(request, runtime).await
    }

    /// Natural-language query over image and video content
    pub async fn semantic_query(
        &self,
        request: &SemanticQueryRequest,
    ) -> Result<ApiResponse<SemanticQueryResponseBody>> {
        self.semantic_query_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn semantic_query_with_options(
        &self,
        request: &SemanticQueryRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<SemanticQueryResponseBody>> {
        self.api.execute::<operations::SemanticQuery>(request, runtime).await
    }

    // Tasks
    pub async fn get_task(
        &self,
        request: &GetTaskRequest,
    ) -> Result<ApiResponse<GetTaskResponseBody>> {
        self.get_task_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn get_task_with_options(
        &self,
        request: &GetTaskRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<GetTaskResponseBody>> {
        self.api.execute::<operations::GetTask>(request, runtime).await
    }

    pub async fn list_tasks(
        &self,
        request: &ListTasksRequest,
    ) -> Result<ApiResponse<ListTasksResponseBody>> {
        self.list_tasks_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn list_tasks_with_options(
        &self,
        request: &ListTasksRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<ListTasksResponseBody>> {
        self.api.execute::<operations::ListTasks>(request, runtime).await
    }

    /// Start clustering the faces found in a dataset
    pub async fn create_figure_clustering_task(
        &self,
        request: &CreateFigureClusteringTaskRequest,
    ) -> Result<ApiResponse<CreateFigureClusteringTaskResponseBody>> {
        self.create_figure_clustering_task_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn create_figure_clustering_task_with_options(
        &self,
        request: &CreateFigureClusteringTaskRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<CreateFigureClusteringTaskResponseBody>> {
        self.api.execute::<operations::CreateFigureClusteringTask>(request, runtime).await
    }

    /// Start transcoding one or more sources into targets
    pub async fn create_media_convert_task(
        &self,
        request: &CreateMediaConvertTaskRequest,
    ) -> Result<ApiResponse<CreateMediaConvertTaskResponseBody>> {
        self.create_media_convert_task_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn create_media_convert_task_with_options(
        &self,
        request: &CreateMediaConvertTaskRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<CreateMediaConvertTaskResponseBody>> {
        self.api.execute::<operations::CreateMediaConvertTask>(request, runtime).await
    }

    // Detection
    pub async fn detect_image_labels(
        &self,
        request: &DetectImageLabelsRequest,
    ) -> Result<ApiResponse<DetectImageLabelsResponseBody>> {
        self.detect_image_labels_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn detect_image_labels_with_options(
        &self,
        request: &DetectImageLabelsRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<DetectImageLabelsResponseBody>> {
        self.api.execute::<operations::DetectImageLabels>(request, runtime).await
    }

    pub async fn detect_image_faces(
        &self,
        request: &DetectImageFacesRequest,
    ) -> Result<ApiResponse<DetectImageFacesResponseBody>> {
        self.detect_image_faces_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn detect_image_faces_with_options(
        &self,
        request: &DetectImageFacesRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<DetectImageFacesResponseBody>> {
        self.api.execute::<operations::DetectImageFaces>(request, runtime).await
    }

    /// Probe container and stream metadata of a media file
    pub async fn detect_media_meta(
        &self,
        request: &DetectMediaMetaRequest,
    ) -> Result<ApiResponse<DetectMediaMetaResponseBody>> {
        self.detect_media_meta_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn detect_media_meta_with_options(
        &self,
        request: &DetectMediaMetaRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<DetectMediaMetaResponseBody>> {
        self.api.execute::<operations::DetectMediaMeta>(request, runtime).await
    }

    // Weboffice
    /// Issue tokens for previewing or editing an office document
    pub async fn generate_weboffice_token(
        &self,
        request: &GenerateWebofficeTokenRequest,
    ) -> Result<ApiResponse<GenerateWebofficeTokenResponseBody>> {
        self.generate_weboffice_token_with_options(request, &RuntimeOptions::default())
            .await
    }

    pub async fn generate_weboffice_token_with_options(
        &self,
        request: &GenerateWebofficeTokenRequest,
        runtime: &RuntimeOptions,
    ) -> Result<ApiResponse<GenerateWebofficeTokenResponseBody>> {
        self.api.execute::<operations::GenerateWebofficeToken>(request, runtime).await
    }
}
